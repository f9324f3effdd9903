//! CLI library components for rgbmig.

pub mod logging;
