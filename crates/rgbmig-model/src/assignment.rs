//! Index assignments produced by walking one constant listing.

use serde::{Deserialize, Serialize};

/// A scalar constant with its implicit index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagAssignment {
    /// Index implied by the directives preceding the declaration.
    pub index: u32,
    /// Constant name as written in the listing.
    pub name: String,
}

impl FlagAssignment {
    pub fn new(index: u32, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// Position of a map constant: group number and map number within the group.
///
/// Both cursors advance from 0, so the first `newgroup` opens group 1 and
/// the first `map_const` after it is map 1. A `map_const` before any
/// `newgroup` lands in group 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapId {
    pub group: u32,
    pub map: u32,
}

impl MapId {
    pub fn new(group: u32, map: u32) -> Self {
        Self { group, map }
    }
}

/// A grouped map constant with its implicit (group, map) position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapAssignment {
    pub id: MapId,
    /// Constant name as written in the listing.
    pub name: String,
}

impl MapAssignment {
    pub fn new(id: MapId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Everything one walk of a constant listing produces.
///
/// `flags` and `maps` preserve file order, including duplicate names.
/// Name-keyed lookups built over a listing are last-write-wins; the
/// sequence itself keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantListing {
    /// Scalar assignments, in file order.
    pub flags: Vec<FlagAssignment>,
    /// Grouped assignments, in file order.
    pub maps: Vec<MapAssignment>,
    /// Indexes skipped over without ever receiving a name.
    pub unused: Vec<u32>,
}
