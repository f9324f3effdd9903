//! Correlation results between two versions of one listing.

use serde::{Deserialize, Serialize};

use crate::assignment::MapId;

/// A name present in both versions, with its index in each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCorrelation {
    /// Index assigned by the source version.
    pub source: u32,
    /// Index assigned by the target version.
    pub target: u32,
    pub name: String,
}

/// A name present in the source version only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDifference {
    pub index: u32,
    pub name: String,
}

/// A grouped name present in both versions, with its position in each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapCorrelation {
    pub source: MapId,
    pub target: MapId,
    pub name: String,
}

/// A grouped name present in the source version only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDifference {
    pub id: MapId,
    pub name: String,
}
