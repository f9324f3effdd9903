//! Sequential index assignment over a constant listing.

use rgbmig_model::{ConstantListing, Directive, FlagAssignment, MapAssignment, MapId};
use tracing::debug;

use crate::error::{ParseError, Result};
use crate::lexer::classify;

/// Cursor state threaded through one walk of a listing.
#[derive(Debug, Default)]
struct Cursors {
    index: u32,
    group: u32,
    map: u32,
}

/// Walks a constant listing and assigns the implicit indexes.
///
/// The index cursor starts at 0. The group cursor starts at 0 and its map
/// sub-cursor resets on every `newgroup`, so the first group is 1 and the
/// first map constant within a group is 1. Lines that classify to no
/// directive neither advance a cursor nor emit.
///
/// A malformed skip count or jump target aborts the walk with the offending
/// line and its 1-based number.
pub fn assign_lines<'a, I>(lines: I) -> Result<ConstantListing>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut listing = ConstantListing::default();
    let mut cursors = Cursors::default();

    for (offset, line) in lines.into_iter().enumerate() {
        let directive = classify(line).map_err(|kind| ParseError {
            kind,
            line: line.trim().to_string(),
            line_number: offset + 1,
        })?;
        if let Some(directive) = directive {
            apply(directive, &mut cursors, &mut listing);
        }
    }

    debug!(
        flags = listing.flags.len(),
        maps = listing.maps.len(),
        unused = listing.unused.len(),
        "assigned indexes"
    );
    Ok(listing)
}

/// [`assign_lines`] over a whole source text.
pub fn assign_source(source: &str) -> Result<ConstantListing> {
    assign_lines(source.lines())
}

/// Assignment over pre-lexed directives. Infallible: classification is the
/// only fallible step.
pub fn assign_directives<I>(directives: I) -> ConstantListing
where
    I: IntoIterator<Item = Directive>,
{
    let mut listing = ConstantListing::default();
    let mut cursors = Cursors::default();
    for directive in directives {
        apply(directive, &mut cursors, &mut listing);
    }
    listing
}

fn apply(directive: Directive, cursors: &mut Cursors, listing: &mut ConstantListing) {
    match directive {
        Directive::Const(name) => {
            listing.flags.push(FlagAssignment::new(cursors.index, name));
            cursors.index += 1;
        }
        Directive::ConstSkip { count } => {
            cursors.index += count;
        }
        Directive::ConstSkipUnused => {
            listing.unused.push(cursors.index);
            cursors.index += 1;
        }
        Directive::ConstNext { target } => {
            // Half-open gap up to the jump target; empty for a backward or
            // in-place jump, which still moves the cursor.
            if target > cursors.index {
                listing.unused.extend(cursors.index..target);
            }
            cursors.index = target;
        }
        Directive::NewGroup => {
            cursors.group += 1;
            cursors.map = 0;
        }
        Directive::MapConst(name) => {
            cursors.map += 1;
            listing
                .maps
                .push(MapAssignment::new(MapId::new(cursors.group, cursors.map), name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_skip_advances_without_emitting() {
        let listing = assign_source("\tconst A\n\tconst_skip 2\n\tconst B\n").unwrap();
        assert_eq!(
            listing.flags,
            vec![FlagAssignment::new(0, "A"), FlagAssignment::new(3, "B")]
        );
        assert!(listing.unused.is_empty());
    }

    #[test]
    fn test_parse_error_carries_line_number() {
        let error = assign_source("\tconst A\n\tconst_skip two\n").unwrap_err();
        assert_eq!(error.line_number, 2);
        assert_eq!(error.line, "const_skip two");
        assert_eq!(
            error.kind,
            ParseErrorKind::BadSkipCount {
                argument: "two".to_string()
            }
        );
    }

    #[test]
    fn test_directives_walk_matches_line_walk() {
        let from_lines = assign_source("\tnewgroup\n\tmap_const FIRST\n").unwrap();
        let from_directives = assign_directives([
            Directive::NewGroup,
            Directive::MapConst("FIRST".to_string()),
        ]);
        assert_eq!(from_lines, from_directives);
    }
}
