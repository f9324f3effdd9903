//! Output rendering for derived migration tables.
//!
//! The save patcher consumes the derived tables as C++ source pasted into
//! its patching code; this crate renders exactly those constructs.

mod cpp;

pub use cpp::{FlagMapOptions, render_flag_map, render_map_pairs, render_unused_array};
