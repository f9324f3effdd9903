//! String-literal extraction over a source tree.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, SymError};

/// A double-quoted literal: runs of non-quote, non-backslash characters or
/// backslash-escaped characters between two quotes.
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)""#).expect("invalid string literal pattern")
});

/// Collects the distinct double-quoted literal contents of one source text.
///
/// The content between the outer quotes is kept verbatim; escape sequences
/// are not unescaped, so `"a\"b"` contributes `a\"b`.
pub fn literals_in_source(text: &str) -> BTreeSet<String> {
    STRING_LITERAL
        .captures_iter(text)
        .map(|capture| capture[1].to_string())
        .collect()
}

/// Unions [`literals_in_source`] over every file with the given extension
/// under the given roots, recursively.
///
/// The result is a pure set: file origin, order, and duplicate counts are
/// discarded. Files are read lossily so stray non-UTF-8 bytes cannot abort
/// a scan, but a missing root directory is an error.
pub fn collect_literals(roots: &[PathBuf], extension: &str) -> Result<BTreeSet<String>> {
    let mut literals = BTreeSet::new();
    for root in roots {
        if !root.is_dir() {
            return Err(SymError::DirectoryNotFound { path: root.clone() });
        }
        collect_from_dir(root, extension, &mut literals)?;
        debug!(root = %root.display(), total = literals.len(), "scanned source root");
    }
    Ok(literals)
}

fn collect_from_dir(dir: &Path, extension: &str, literals: &mut BTreeSet<String>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|source| SymError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| SymError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_from_dir(&path, extension, literals)?;
            continue;
        }

        let matches_extension = path
            .extension()
            .and_then(|value| value.to_str())
            .map(|value| value.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if !matches_extension {
            continue;
        }

        let bytes = fs::read(&path).map_err(|source| SymError::FileRead {
            path: path.clone(),
            source,
        })?;
        literals.extend(literals_in_source(&String::from_utf8_lossy(&bytes)));
    }

    Ok(())
}
