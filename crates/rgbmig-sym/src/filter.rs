//! Order-preserving symbol-file filtering against a literal set.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Save/state labels that must survive filtering even when no source
/// literal names them: PC box slots with their names and themes, their
/// backups, and overworld object structs. Matched anywhere in the label.
static STRUCTURAL_LABELS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"sNewBox\d+",
        r"sNewBox\d+Name",
        r"sNewBox\d+Theme",
        r"sBackupNewBox\d+",
        r"sBackupNewBox\d+Name",
        r"sBackupNewBox\d+Theme",
        r"wObject\d+Struct",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("invalid structural label pattern"))
    .collect()
});

/// One well-formed symbol-file line: `<address> <label>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolLine<'a> {
    /// Bank:offset token; opaque to the filter.
    pub address: &'a str,
    pub label: &'a str,
}

/// Splits a line at its first whitespace run.
///
/// Lines that do not yield exactly two tokens are malformed and return
/// `None`; the filter drops them silently rather than failing.
pub fn parse_symbol_line(line: &str) -> Option<SymbolLine<'_>> {
    let trimmed = line.trim();
    let (address, rest) = trimmed.split_once(char::is_whitespace)?;
    let label = rest.trim_start();
    if label.is_empty() {
        return None;
    }
    Some(SymbolLine { address, label })
}

/// True when the label is named by a source literal or matches one of the
/// structural label patterns.
pub fn retain_label(label: &str, literals: &BTreeSet<String>) -> bool {
    literals.contains(label) || STRUCTURAL_LABELS.iter().any(|pattern| pattern.is_match(label))
}

/// Order-preserving subset of `lines` whose label passes [`retain_label`].
/// Malformed lines are dropped.
pub fn filter_symbols<'a, I>(lines: I, literals: &BTreeSet<String>) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| {
            parse_symbol_line(line)
                .is_some_and(|symbol| retain_label(symbol.label, literals))
        })
        .collect()
}
