use thiserror::Error;

/// Why a directive argument failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("invalid skip count `{argument}`")]
    BadSkipCount { argument: String },

    #[error("invalid jump target `{argument}` (expected a `$`-prefixed hex value)")]
    BadJumpTarget { argument: String },
}

/// A directive whose argument could not be parsed.
///
/// Aborts the walk of the offending listing. A partially assigned index
/// sequence would be misleading, so there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {kind} in `{line}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Offending line content, as read.
    pub line: String,
    /// 1-based line number within the listing.
    pub line_number: usize,
}

pub type Result<T> = std::result::Result<T, ParseError>;
