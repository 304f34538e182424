use super::types::Element;

/// A single atom in a molecule.
///
/// `element` is `None` for pseudo atoms, the placeholder species created
/// when a source atomic number cannot be resolved to a known element.
/// Atoms carry no identifier of their own: within a molecule an atom is
/// addressed purely by its position in the atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atom {
    pub element: Option<Element>,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            element: Some(element),
        }
    }

    /// A placeholder atom standing in for an unresolvable species.
    pub fn pseudo() -> Self {
        Self { element: None }
    }

    #[inline]
    pub fn is_pseudo(&self) -> bool {
        self.element.is_none()
    }

    pub fn atomic_number(&self) -> Option<u32> {
        self.element.map(|el| el.atomic_number() as u32)
    }

    pub fn symbol(&self) -> Option<&'static str> {
        self.element.map(|el| el.symbol())
    }
}
