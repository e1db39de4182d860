//! Source locations.
//!
//! A `Location` identifies one syntactic position inside one source. It is the
//! key for every definition handed to the ordering engine, for every node in
//! the dependency graph, and for every piece of evidence attached to an edge.
//! Locations are compared structurally: two locations are equal when they
//! name the same byte range of the same source.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::fmt;

/// Identifier of a source (usually one file) within a checking session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceId(pub u32);

impl SourceId {
    /// Sentinel for locations synthesized outside any source.
    pub const NONE: SourceId = SourceId(u32::MAX);

    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// A byte range within a source.
///
/// The derived ordering is (source, start, end), which gives the engine a
/// stable total order for deterministic graph traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub source: SourceId,
    pub start: u32,
    pub end: u32,
}

impl Location {
    pub const fn new(source: SourceId, start: u32, end: u32) -> Self {
        Self { source, start, end }
    }

    /// Location of a single-byte position, handy for synthesized nodes.
    pub const fn point(source: SourceId, offset: u32) -> Self {
        Self {
            source,
            start: offset,
            end: offset,
        }
    }

    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `other` lies entirely within this location.
    pub fn contains(&self, other: &Location) -> bool {
        self.source == other.source && self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_none() {
            write!(f, "<synthetic>:{}-{}", self.start, self.end)
        } else {
            write!(f, "{}:{}-{}", self.source.0, self.start, self.end)
        }
    }
}

/// Hash map keyed by location.
pub type LocationMap<V> = FxHashMap<Location, V>;

/// Hash set of locations.
pub type LocationSet = FxHashSet<Location>;

#[cfg(test)]
#[path = "../tests/location_tests.rs"]
mod tests;
