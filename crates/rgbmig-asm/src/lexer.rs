//! Per-line classification of constant-listing directives.

use rgbmig_model::Directive;

use crate::error::ParseErrorKind;

/// Classifies one line of a constant listing.
///
/// Returns `Ok(None)` for lines that are not directives: blank lines,
/// comments, raw assembly, and the `const_def` header. The first token of
/// the line (delimited by whitespace or a comment) selects the directive,
/// so no line can match two forms and check order cannot matter.
pub fn classify(line: &str) -> Result<Option<Directive>, ParseErrorKind> {
    let trimmed = line.trim_start();
    let token_len = trimmed
        .find(|c: char| c.is_whitespace() || c == ';')
        .unwrap_or(trimmed.len());
    let (token, rest) = trimmed.split_at(token_len);
    let rest = rest.trim();

    match token {
        "const" => Ok(const_name(rest).map(Directive::Const)),
        "const_def" => Ok(None),
        "const_skip" => classify_skip(rest).map(Some),
        "const_next" => classify_next(rest).map(Some),
        "newgroup" => Ok(Some(Directive::NewGroup)),
        "map_const" => Ok(map_const_name(rest).map(Directive::MapConst)),
        _ => Ok(None),
    }
}

/// Leading run of word characters of the first argument. A `const` with no
/// such run declares nothing and the line is ignored.
fn const_name(rest: &str) -> Option<String> {
    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() { None } else { Some(name) }
}

fn classify_skip(rest: &str) -> Result<Directive, ParseErrorKind> {
    if rest.is_empty() {
        return Ok(Directive::ConstSkip { count: 1 });
    }
    if let Some(comment) = rest.strip_prefix(';') {
        // Only an argument-less skip can carry the unused annotation.
        if comment.trim().starts_with("unused") {
            return Ok(Directive::ConstSkipUnused);
        }
        return Ok(Directive::ConstSkip { count: 1 });
    }
    let argument = first_argument(rest);
    let count = argument
        .parse::<u32>()
        .map_err(|_| ParseErrorKind::BadSkipCount {
            argument: argument.to_string(),
        })?;
    Ok(Directive::ConstSkip { count })
}

fn classify_next(rest: &str) -> Result<Directive, ParseErrorKind> {
    let argument = first_argument(rest);
    let bad_target = || ParseErrorKind::BadJumpTarget {
        argument: argument.to_string(),
    };
    let Some(hex) = argument.strip_prefix('$') else {
        return Err(bad_target());
    };
    let target = u32::from_str_radix(hex, 16).map_err(|_| bad_target())?;
    Ok(Directive::ConstNext { target })
}

/// Text before the first comma, trimmed. `map_const` takes further macro
/// arguments after the name.
fn map_const_name(rest: &str) -> Option<String> {
    let name = rest.split(',').next().unwrap_or("").trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn first_argument(rest: &str) -> &str {
    rest.split(|c: char| c.is_whitespace() || c == ';')
        .next()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_const() {
        assert_eq!(
            classify("\tconst EVENT_GOT_STARTER"),
            Ok(Some(Directive::Const("EVENT_GOT_STARTER".to_string())))
        );
    }

    #[test]
    fn test_classify_const_with_comment() {
        assert_eq!(
            classify("\tconst EVENT_BUG_CONTEST ; Tuesday only"),
            Ok(Some(Directive::Const("EVENT_BUG_CONTEST".to_string())))
        );
    }

    #[test]
    fn test_const_def_is_ignored() {
        assert_eq!(classify("\tconst_def"), Ok(None));
    }

    #[test]
    fn test_classify_skip_variants() {
        assert_eq!(
            classify("\tconst_skip"),
            Ok(Some(Directive::ConstSkip { count: 1 }))
        );
        assert_eq!(
            classify("\tconst_skip 3"),
            Ok(Some(Directive::ConstSkip { count: 3 }))
        );
        assert_eq!(
            classify("\tconst_skip ; unused"),
            Ok(Some(Directive::ConstSkipUnused))
        );
        // A counted skip is never an unused marker.
        assert_eq!(
            classify("\tconst_skip 2 ; unused"),
            Ok(Some(Directive::ConstSkip { count: 2 }))
        );
        // A non-unused comment falls back to the default count.
        assert_eq!(
            classify("\tconst_skip ; reserved"),
            Ok(Some(Directive::ConstSkip { count: 1 }))
        );
    }

    #[test]
    fn test_classify_skip_bad_count() {
        assert_eq!(
            classify("\tconst_skip two"),
            Err(ParseErrorKind::BadSkipCount {
                argument: "two".to_string()
            })
        );
    }

    #[test]
    fn test_classify_next() {
        assert_eq!(
            classify("\tconst_next $0010"),
            Ok(Some(Directive::ConstNext { target: 0x10 }))
        );
        assert_eq!(
            classify("\tconst_next $7FF ; padding"),
            Ok(Some(Directive::ConstNext { target: 0x7ff }))
        );
    }

    #[test]
    fn test_classify_next_bad_target() {
        assert_eq!(
            classify("\tconst_next 0010"),
            Err(ParseErrorKind::BadJumpTarget {
                argument: "0010".to_string()
            })
        );
        assert_eq!(
            classify("\tconst_next $WXYZ"),
            Err(ParseErrorKind::BadJumpTarget {
                argument: "$WXYZ".to_string()
            })
        );
    }

    #[test]
    fn test_classify_group_directives() {
        assert_eq!(classify("\tnewgroup"), Ok(Some(Directive::NewGroup)));
        assert_eq!(
            classify("\tmap_const OLIVINE_CITY, MAPENV_TOWN"),
            Ok(Some(Directive::MapConst("OLIVINE_CITY".to_string())))
        );
    }

    #[test]
    fn test_unrecognized_lines_are_ignored() {
        assert_eq!(classify(""), Ok(None));
        assert_eq!(classify("; event flags"), Ok(None));
        assert_eq!(classify("SECTION \"Events\", ROM0"), Ok(None));
        assert_eq!(classify("\tconst"), Ok(None));
        assert_eq!(classify("\tmap_const ,"), Ok(None));
    }
}
