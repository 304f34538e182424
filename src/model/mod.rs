//! Core data structures for parsed molecular records.
//!
//! - [`types`] – Periodic table elements and bond order classifications.
//! - [`atom`] – Minimal atom representation, including pseudo atoms.
//! - [`molecule`] – Molecules, bonds, molecule collections and substance
//!   records, owned strictly tree-shaped.
//!
//! Everything here is built once per parse by [`crate::io::pubchem`] and
//! handed to the caller immutable; nothing is shared or reused across
//! parse invocations.

pub mod atom;
pub mod molecule;
pub mod types;
