//! Reading of molecular structure documents.

pub mod error;
pub mod pubchem;

pub use error::Error;
