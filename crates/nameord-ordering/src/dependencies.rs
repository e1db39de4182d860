//! Dependency sets and maps.
//!
//! A `DependencySet` is the accumulator threaded through the use collector:
//! it maps each dependency location to the evidence (reference sites) that
//! justify the edge. The collector treats it as a pure fold value - every
//! traversal step takes a set and returns the extended set.

use nameord_common::limits::EVIDENCE_INLINE;
use nameord_common::{Location, LocationMap, LocationSet};
use smallvec::SmallVec;

/// Reference sites justifying one edge, in discovery order. Never empty.
pub type Evidence = SmallVec<[Location; EVIDENCE_INLINE]>;

/// Dependencies of one definition with their evidence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencySet {
    edges: LocationMap<Evidence>,
    /// Writes whose refinements were already explored for this definition.
    /// Exploring them again would only rediscover the same edges.
    refined_writes: LocationSet,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge to `target`, justified by the reference at `why`.
    #[must_use]
    pub fn with_edge(mut self, target: Location, why: Location) -> Self {
        let evidence = self.edges.entry(target).or_default();
        if !evidence.contains(&why) {
            evidence.push(why);
        }
        self
    }

    /// Mark the refinements of `write` as explored. Returns `false` if they
    /// already were.
    pub(crate) fn start_refinements(&mut self, write: Location) -> bool {
        self.refined_writes.insert(write)
    }

    pub fn contains(&self, target: &Location) -> bool {
        self.edges.contains_key(target)
    }

    pub fn evidence(&self, target: &Location) -> Option<&[Location]> {
        self.edges.get(target).map(SmallVec::as_slice)
    }

    /// Dependency locations, sorted.
    pub fn targets(&self) -> Vec<Location> {
        let mut targets: Vec<Location> = self.edges.keys().copied().collect();
        targets.sort_unstable();
        targets
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Location, &Evidence)> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Dependencies of every definition in a batch, keyed by definition location.
pub type DependencyMap = LocationMap<DependencySet>;

#[cfg(test)]
#[path = "../tests/dependencies_tests.rs"]
mod tests;
