//! A streaming reader for PubChem substance/compound XML records.
//!
//! PubChem encodes molecular graphs as nested blocks: a `PC-Substance`
//! wrapper holding a `PC-Compounds` list, with each `PC-Compound`
//! carrying its atoms and bonds as parallel value lists. This crate walks
//! those blocks with an incremental, event-driven tokenizer (backed by
//! `quick-xml`) and reconstructs the graph in memory: atoms in document
//! order, bonds rebuilt from the three independently streamed endpoint
//! and order lists, with strict validation of list lengths and endpoint
//! ranges.
//!
//! # Quick start
//!
//! ```
//! use pubchem_xml::{read_compound, BondOrder, Error};
//!
//! // Water: O, H, H with two single bonds.
//! let xml = r#"
//! <PC-Compound>
//!   <PC-Atoms>
//!     <PC-Atoms_element>
//!       <PC-Element>8</PC-Element>
//!       <PC-Element>1</PC-Element>
//!       <PC-Element>1</PC-Element>
//!     </PC-Atoms_element>
//!   </PC-Atoms>
//!   <PC-Bonds>
//!     <PC-Bonds_aid1>
//!       <PC-Bonds_aid1_E>1</PC-Bonds_aid1_E>
//!       <PC-Bonds_aid1_E>1</PC-Bonds_aid1_E>
//!     </PC-Bonds_aid1>
//!     <PC-Bonds_aid2>
//!       <PC-Bonds_aid2_E>2</PC-Bonds_aid2_E>
//!       <PC-Bonds_aid2_E>3</PC-Bonds_aid2_E>
//!     </PC-Bonds_aid2>
//!     <PC-Bonds_order>
//!       <PC-BondType>1</PC-BondType>
//!       <PC-BondType>1</PC-BondType>
//!     </PC-Bonds_order>
//!   </PC-Bonds>
//! </PC-Compound>
//! "#;
//!
//! let molecule = read_compound(xml.as_bytes())?.expect("document holds a compound");
//! assert_eq!(molecule.atom_count(), 3);
//! assert_eq!(molecule.bond_count(), 2);
//! assert_eq!(molecule.atoms[0].symbol(), Some("O"));
//! assert_eq!(molecule.bonds[0].order, BondOrder::Single);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Behavior notes
//!
//! - Atom identity is positional: bond endpoints are 1-based positions in
//!   the atom list on the wire, converted once to 0-based indices.
//! - An atomic number the resolver cannot map becomes a pseudo atom, not
//!   an error; resolution is injectable via
//!   [`io::pubchem::ElementResolver`].
//! - Bond endpoint/order lists must agree in length and endpoints must be
//!   in range; violations abort the parse with no partial result. An
//!   individual bond whose order code is not 1, 2 or 3 is dropped
//!   silently — that asymmetry is deliberate, inherited from the format's
//!   reference readers.
//! - A compound with zero atoms parses fine on its own but is excluded
//!   from any enclosing compound set.

mod model;

pub mod io;

pub use io::Error;
pub use io::pubchem::{
    ElementResolver, PeriodicTable, read_compound, read_compound_with, read_substance,
    read_substance_with,
};
pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule, MoleculeSet, Substance};
pub use model::types::{BondOrder, Element};
