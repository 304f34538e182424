use super::atom::Atom;
use super::types::BondOrder;

/// A bond between two atoms, addressed by their 0-based positions in the
/// owning molecule's atom list.
///
/// Endpoints keep the order they appeared in on the wire; callers must
/// not rely on `aid1 <= aid2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub aid1: usize,
    pub aid2: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(aid1: usize, aid2: usize, order: BondOrder) -> Self {
        Self { aid1, aid2, order }
    }
}

/// An ordered atom list plus the bonds connecting it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn add_bond(&mut self, bond: Bond) {
        self.bonds.push(bond);
    }
}

/// An ordered collection of molecules.
///
/// Structurally empty molecules are rejected at insertion time, so a set
/// never stores a molecule with zero atoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeSet {
    molecules: Vec<Molecule>,
}

impl MoleculeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a molecule, silently dropping it when it has no atoms.
    pub fn add(&mut self, molecule: Molecule) {
        if molecule.atom_count() > 0 {
            self.molecules.push(molecule);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Molecule> {
        self.molecules.iter()
    }
}

impl IntoIterator for MoleculeSet {
    type Item = Molecule;
    type IntoIter = std::vec::IntoIter<Molecule>;

    fn into_iter(self) -> Self::IntoIter {
        self.molecules.into_iter()
    }
}

/// A substance record: an identifier plus the compounds registered under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Substance {
    pub sid: String,
    pub compounds: MoleculeSet,
}

impl Substance {
    /// Sentinel used when the record carries no identifier block.
    pub const UNKNOWN_SID: &'static str = "unknown";

    pub fn new() -> Self {
        Self {
            sid: Self::UNKNOWN_SID.to_string(),
            compounds: MoleculeSet::new(),
        }
    }
}

impl Default for Substance {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;

    #[test]
    fn molecule_counts() {
        let mut molecule = Molecule::new();
        molecule.add_atom(Atom::new(Element::C));
        molecule.add_atom(Atom::new(Element::O));
        molecule.add_bond(Bond::new(0, 1, BondOrder::Double));
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.bond_count(), 1);
    }

    #[test]
    fn set_drops_empty_molecules() {
        let mut set = MoleculeSet::new();
        set.add(Molecule::new());
        assert!(set.is_empty());

        let mut populated = Molecule::new();
        populated.add_atom(Atom::new(Element::N));
        set.add(populated);
        set.add(Molecule::new());
        assert_eq!(set.len(), 1);
        assert_eq!(set.molecules()[0].atom_count(), 1);
    }

    #[test]
    fn substance_defaults_to_unknown_sid() {
        let substance = Substance::new();
        assert_eq!(substance.sid, "unknown");
        assert!(substance.compounds.is_empty());
    }
}
