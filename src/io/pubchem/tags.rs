//! Tag names of the PubChem substance/compound XML schema.

// record wrappers
pub const SUBSTANCE: &str = "PC-Substance";
pub const SUBSTANCE_SID: &str = "PC-Substance_sid";
pub const ID_ID: &str = "PC-ID_id";
pub const COMPOUNDS: &str = "PC-Compounds";
pub const COMPOUND: &str = "PC-Compound";

// atom block
pub const ATOM_BLOCK: &str = "PC-Atoms";
pub const ATOM_ELEMENTS: &str = "PC-Atoms_element";
pub const ELEMENT: &str = "PC-Element";

// bond block
pub const BOND_BLOCK: &str = "PC-Bonds";
pub const BOND_AID1: &str = "PC-Bonds_aid1";
pub const BOND_AID1_E: &str = "PC-Bonds_aid1_E";
pub const BOND_AID2: &str = "PC-Bonds_aid2";
pub const BOND_AID2_E: &str = "PC-Bonds_aid2_E";
pub const BOND_ORDER: &str = "PC-Bonds_order";
pub const BOND_TYPE: &str = "PC-BondType";
