//! Dependency graph: the dependency map with evidence erased and dangling
//! targets pruned.

use crate::dependencies::DependencyMap;
use nameord_common::{Location, LocationMap, LocationSet};

#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    adjacency: LocationMap<LocationSet>,
    edge_count: usize,
}

impl DependencyGraph {
    /// Build the graph over the keys of `dependencies`. Edges to locations
    /// that are not keys are dropped: a batch need not be closed.
    pub fn from_dependencies(dependencies: &DependencyMap) -> Self {
        let mut edge_count = 0;
        let adjacency = dependencies
            .iter()
            .map(|(&node, deps)| {
                let successors: LocationSet = deps
                    .iter()
                    .map(|(&target, _)| target)
                    .filter(|target| dependencies.contains_key(target))
                    .collect();
                edge_count += successors.len();
                (node, successors)
            })
            .collect();
        Self {
            adjacency,
            edge_count,
        }
    }

    pub fn adjacency(&self) -> &LocationMap<LocationSet> {
        &self.adjacency
    }

    pub fn successors(&self, node: &Location) -> Option<&LocationSet> {
        self.adjacency.get(node)
    }

    pub fn depends_on_itself(&self, node: &Location) -> bool {
        self.adjacency
            .get(node)
            .is_some_and(|successors| successors.contains(node))
    }

    /// All nodes, sorted.
    pub fn nodes(&self) -> Vec<Location> {
        let mut nodes: Vec<Location> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
#[path = "../tests/graph_tests.rs"]
mod tests;
