pub mod assignment;
pub mod correlation;
pub mod directive;

pub use assignment::{ConstantListing, FlagAssignment, MapAssignment, MapId};
pub use correlation::{FlagCorrelation, FlagDifference, MapCorrelation, MapDifference};
pub use directive::Directive;
