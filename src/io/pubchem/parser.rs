//! Block parsers for PubChem substance/compound records.
//!
//! Each function is entered with the cursor positioned on the opening tag
//! of the block it consumes and returns with that block's closing tag
//! consumed. Nesting is handled by ordinary call/return; every loop ends
//! on an explicit termination predicate (the block's own closing tag or
//! end of document), never via error control flow.

use super::events::{EventKind, TokenSource};
use super::{ElementResolver, tags};
use crate::io::error::Error;
use crate::model::atom::Atom;
use crate::model::molecule::{Bond, Molecule, MoleculeSet, Substance};
use crate::model::types::BondOrder;

/// Collects the text values of every `field_tag` element occurring before
/// `end_tag` closes.
///
/// Sibling tags that are neither `field_tag` nor `end_tag` are skipped;
/// the format carries fields this parser does not model. Interpretation
/// of the values (numeric or otherwise) is left to the caller.
pub fn parse_values<S: TokenSource>(
    src: &mut S,
    end_tag: &str,
    field_tag: &str,
) -> Result<Vec<String>, Error> {
    let mut values = Vec::new();
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == end_tag => break,
            EventKind::Start if src.tag_name() == field_tag => {
                values.push(src.read_text()?);
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(values)
}

/// Consumes a `PC-Atoms` block, appending one atom per element
/// declaration to `molecule` in document order.
pub fn parse_atom_block<S, E>(
    src: &mut S,
    resolver: &E,
    molecule: &mut Molecule,
) -> Result<(), Error>
where
    S: TokenSource,
    E: ElementResolver + ?Sized,
{
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::ATOM_BLOCK => break,
            EventKind::Start if src.tag_name() == tags::ATOM_ELEMENTS => {
                parse_atom_elements(src, resolver, molecule)?;
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

fn parse_atom_elements<S, E>(
    src: &mut S,
    resolver: &E,
    molecule: &mut Molecule,
) -> Result<(), Error>
where
    S: TokenSource,
    E: ElementResolver + ?Sized,
{
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::ATOM_ELEMENTS => break,
            EventKind::Start if src.tag_name() == tags::ELEMENT => {
                let text = src.read_text()?;
                let number = text
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| Error::malformed("atomic number", text.trim()))?;
                // an unmapped atomic number is not an error: the source
                // species becomes a pseudo atom
                match resolver.resolve(number) {
                    Some(element) => molecule.add_atom(Atom::new(element)),
                    None => molecule.add_atom(Atom::pseudo()),
                }
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(())
}

/// Consumes a `PC-Bonds` block and appends the reconstructed bonds to
/// `molecule`.
///
/// The block carries three parallel lists (first endpoints, second
/// endpoints, order codes) that may arrive in any relative order, so
/// length validation can only run once the whole block is consumed.
/// Endpoints are strict: a length mismatch or an out-of-range index
/// aborts the parse. Order codes are lenient per entry: any numeric
/// code outside {1, 2, 3}, negative values included, drops that single
/// bond.
pub fn parse_bond_block<S: TokenSource>(src: &mut S, molecule: &mut Molecule) -> Result<(), Error> {
    let mut aid1s = Vec::new();
    let mut aid2s = Vec::new();
    let mut orders = Vec::new();
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::BOND_BLOCK => break,
            EventKind::Start => {
                if src.tag_name() == tags::BOND_AID1 {
                    aid1s = parse_values(src, tags::BOND_AID1, tags::BOND_AID1_E)?;
                } else if src.tag_name() == tags::BOND_AID2 {
                    aid2s = parse_values(src, tags::BOND_AID2, tags::BOND_AID2_E)?;
                } else if src.tag_name() == tags::BOND_ORDER {
                    orders = parse_values(src, tags::BOND_ORDER, tags::BOND_TYPE)?;
                }
            }
            EventKind::Eof => break,
            _ => {}
        }
    }

    if aid1s.len() != aid2s.len() {
        return Err(Error::StructuralMismatch("endpoint count"));
    }
    if aid1s.len() != orders.len() {
        return Err(Error::StructuralMismatch("order count"));
    }

    for ((aid1, aid2), order) in aid1s.iter().zip(&aid2s).zip(&orders) {
        let a = parse_endpoint(aid1, molecule.atom_count())?;
        let b = parse_endpoint(aid2, molecule.atom_count())?;
        // signed: a negative code is numeric, it just has no mapping and
        // drops the bond like any other unknown code
        let code = order
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::malformed("bond order", order.trim()))?;
        if let Some(order) = u32::try_from(code).ok().and_then(BondOrder::from_code) {
            molecule.add_bond(Bond::new(a, b, order));
        }
    }
    Ok(())
}

// Wire endpoints are 1-based atom positions; this is the single place
// they are converted to the molecule's 0-based addressing.
fn parse_endpoint(text: &str, atom_count: usize) -> Result<usize, Error> {
    let index = text
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::malformed("atom index", text.trim()))?;
    if index < 1 || index > atom_count as i64 {
        return Err(Error::DanglingReference { index, atom_count });
    }
    Ok((index - 1) as usize)
}

/// Consumes a `PC-Compound` record and returns the assembled molecule,
/// which may legitimately have zero atoms.
///
/// The cursor must be on the `PC-Compound` opening tag; if it is not, an
/// empty molecule is returned without consuming anything.
pub fn parse_molecule<S, E>(src: &mut S, resolver: &E) -> Result<Molecule, Error>
where
    S: TokenSource,
    E: ElementResolver + ?Sized,
{
    let mut molecule = Molecule::new();
    if src.tag_name() != tags::COMPOUND {
        return Ok(molecule);
    }
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::COMPOUND => break,
            EventKind::Start => {
                if src.tag_name() == tags::ATOM_BLOCK {
                    parse_atom_block(src, resolver, &mut molecule)?;
                } else if src.tag_name() == tags::BOND_BLOCK {
                    parse_bond_block(src, &mut molecule)?;
                }
                // other start tags are fields this parser does not model
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(molecule)
}

/// Consumes a `PC-Compounds` block, parsing each nested `PC-Compound`
/// into the resulting set. Compounds with zero atoms are skipped by
/// [`MoleculeSet::add`].
///
/// When the cursor is not on the `PC-Compounds` opening tag this is a
/// no-op returning an empty set.
pub fn parse_compounds<S, E>(src: &mut S, resolver: &E) -> Result<MoleculeSet, Error>
where
    S: TokenSource,
    E: ElementResolver + ?Sized,
{
    let mut set = MoleculeSet::new();
    if src.tag_name() != tags::COMPOUNDS {
        return Ok(set);
    }
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::COMPOUNDS => break,
            EventKind::Start if src.tag_name() == tags::COMPOUND => {
                set.add(parse_molecule(src, resolver)?);
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(set)
}

/// Consumes a `PC-Substance` record: its compound set and its substance
/// identifier, defaulting to `"unknown"` when no identifier block occurs.
pub fn parse_substance<S, E>(src: &mut S, resolver: &E) -> Result<Substance, Error>
where
    S: TokenSource,
    E: ElementResolver + ?Sized,
{
    let mut substance = Substance::new();
    if src.tag_name() != tags::SUBSTANCE {
        return Ok(substance);
    }
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::SUBSTANCE => break,
            EventKind::Start => {
                if src.tag_name() == tags::COMPOUNDS {
                    substance.compounds = parse_compounds(src, resolver)?;
                } else if src.tag_name() == tags::SUBSTANCE_SID {
                    substance.sid = parse_sid(src)?;
                }
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(substance)
}

fn parse_sid<S: TokenSource>(src: &mut S) -> Result<String, Error> {
    let mut sid = Substance::UNKNOWN_SID.to_string();
    loop {
        match src.advance()? {
            EventKind::End if src.tag_name() == tags::SUBSTANCE_SID => break,
            EventKind::Start if src.tag_name() == tags::ID_ID => {
                sid = src.read_text()?;
            }
            EventKind::Eof => break,
            _ => {}
        }
    }
    Ok(sid)
}
