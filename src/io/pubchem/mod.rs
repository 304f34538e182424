//! Streaming reader for PubChem substance/compound XML records.
//!
//! The format nests a substance wrapper, a list of compounds and
//! per-compound atom/bond sub-blocks whose values arrive as parallel
//! lists. [`reader`] holds the document-level entry points, [`parser`]
//! the per-block parsers, and [`events`] the narrow cursor contract over
//! the underlying `quick-xml` tokenizer.

use crate::model::types::Element;

pub mod events;
pub mod parser;
pub mod reader;
pub mod tags;

pub use events::{EventKind, TokenSource, XmlTokens};
pub use reader::{read_compound, read_compound_with, read_substance, read_substance_with};

/// Maps source atomic numbers to elements.
///
/// Injected into the parser rather than consulted as a global registry,
/// so atom resolution can be controlled (or stubbed out) by the caller.
/// Returning `None` marks the atom as a pseudo atom; it is not a failure.
pub trait ElementResolver {
    fn resolve(&self, atomic_number: u32) -> Option<Element>;
}

/// Default resolver backed by [`Element::from_atomic_number`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicTable;

impl ElementResolver for PeriodicTable {
    fn resolve(&self, atomic_number: u32) -> Option<Element> {
        Element::from_atomic_number(atomic_number)
    }
}
