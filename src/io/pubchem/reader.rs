//! Document-level entry points.
//!
//! Each reader scans forward for the record of interest and delegates to
//! [`crate::io::pubchem::parser`]. A document that ends before the record
//! appears is not an error; it yields `Ok(None)`.

use super::events::{EventKind, TokenSource, XmlTokens};
use super::{ElementResolver, PeriodicTable, parser, tags};
use crate::io::error::Error;
use crate::model::molecule::{Molecule, Substance};
use std::io::BufRead;

/// Reads the first `PC-Compound` record from `input` using the built-in
/// periodic table.
pub fn read_compound<R: BufRead>(input: R) -> Result<Option<Molecule>, Error> {
    read_compound_with(input, &PeriodicTable)
}

/// Reads the first `PC-Compound` record, resolving atoms through
/// `resolver`.
pub fn read_compound_with<R, E>(input: R, resolver: &E) -> Result<Option<Molecule>, Error>
where
    R: BufRead,
    E: ElementResolver + ?Sized,
{
    let mut src = XmlTokens::new(input);
    if scan_to(&mut src, tags::COMPOUND)? {
        return Ok(Some(parser::parse_molecule(&mut src, resolver)?));
    }
    Ok(None)
}

/// Reads the first `PC-Substance` record from `input` using the built-in
/// periodic table.
pub fn read_substance<R: BufRead>(input: R) -> Result<Option<Substance>, Error> {
    read_substance_with(input, &PeriodicTable)
}

/// Reads the first `PC-Substance` record, resolving atoms through
/// `resolver`.
pub fn read_substance_with<R, E>(input: R, resolver: &E) -> Result<Option<Substance>, Error>
where
    R: BufRead,
    E: ElementResolver + ?Sized,
{
    let mut src = XmlTokens::new(input);
    if scan_to(&mut src, tags::SUBSTANCE)? {
        return Ok(Some(parser::parse_substance(&mut src, resolver)?));
    }
    Ok(None)
}

fn scan_to<S: TokenSource>(src: &mut S, tag: &str) -> Result<bool, Error> {
    loop {
        match src.advance()? {
            EventKind::Start if src.tag_name() == tag => return Ok(true),
            EventKind::Eof => return Ok(false),
            _ => {}
        }
    }
}
