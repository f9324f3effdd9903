//! Parsing of constant-definition listings.
//!
//! A listing never states a constant's numeric index. It is implied by the
//! directives walked before the declaration: `const` assigns and advances,
//! `const_skip` advances, `const_next` jumps the cursor to an absolute
//! value, and `newgroup`/`map_const` maintain a separate (group, map)
//! numbering. [`lexer::classify`] turns one line into a
//! [`rgbmig_model::Directive`]; [`assign::assign_lines`] folds the
//! directives into a [`rgbmig_model::ConstantListing`].

pub mod assign;
pub mod error;
pub mod lexer;

pub use assign::{assign_directives, assign_lines, assign_source};
pub use error::{ParseError, ParseErrorKind, Result};
pub use lexer::classify;
