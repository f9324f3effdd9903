//! Debug symbol file pruning.
//!
//! An assembled ROM's symbol file names every label in the project; the
//! save patcher only needs the handful its own sources mention. This crate
//! collects the string literals of those sources ([`literals`]) and keeps
//! the symbol lines whose label is one of them, or matches a fixed set of
//! structural save/state label shapes ([`filter`]).

pub mod error;
pub mod filter;
pub mod literals;

pub use error::{Result, SymError};
pub use filter::{SymbolLine, filter_symbols, parse_symbol_line, retain_label};
pub use literals::{collect_literals, literals_in_source};
