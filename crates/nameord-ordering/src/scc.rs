//! Strongly connected components.
//!
//! Tarjan's algorithm over an adjacency map, emitting components in
//! dependency-first order: with edges pointing from a node to the nodes it
//! depends on, every component is emitted after all components it can reach.
//!
//! Roots and successors are visited in sorted order and each component's
//! members are sorted, so the result depends only on the graph's contents.

use nameord_common::limits::{STACK_GROWTH_SIZE, STACK_RED_ZONE};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// A node the walk had to visit is missing from the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopsortError<N> {
    pub missing: N,
    /// Every node in the graph, sorted.
    pub nodes: Vec<N>,
    /// Every requested root, sorted.
    pub roots: Vec<N>,
}

impl<N: fmt::Debug> fmt::Display for TopsortError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {:?} not found in graph; nodes: {:?}; roots: {:?}",
            self.missing, self.nodes, self.roots
        )
    }
}

impl<N: fmt::Debug> std::error::Error for TopsortError<N> {}

struct Tarjan<'g, N> {
    graph: &'g FxHashMap<N, FxHashSet<N>>,
    index_counter: u32,
    stack: Vec<N>,
    on_stack: FxHashSet<N>,
    indices: FxHashMap<N, u32>,
    lowlinks: FxHashMap<N, u32>,
    components: Vec<Vec<N>>,
}

/// Compute the strongly connected components reachable from `roots`.
///
/// Every node visited (roots and their transitive successors) must be a key
/// of `graph`; the first one that is not aborts the walk.
pub fn topsort<N>(
    roots: &[N],
    graph: &FxHashMap<N, FxHashSet<N>>,
) -> Result<Vec<Vec<N>>, TopsortError<N>>
where
    N: Copy + Eq + Hash + Ord + fmt::Debug,
{
    let mut tarjan = Tarjan {
        graph,
        index_counter: 0,
        stack: Vec::new(),
        on_stack: FxHashSet::default(),
        indices: FxHashMap::default(),
        lowlinks: FxHashMap::default(),
        components: Vec::new(),
    };

    let mut sorted_roots = roots.to_vec();
    sorted_roots.sort_unstable();
    sorted_roots.dedup();

    for &root in &sorted_roots {
        if !tarjan.indices.contains_key(&root) {
            if let Err(missing) = tarjan.strongconnect(root) {
                let mut nodes: Vec<N> = graph.keys().copied().collect();
                nodes.sort_unstable();
                return Err(TopsortError {
                    missing,
                    nodes,
                    roots: sorted_roots,
                });
            }
        }
    }

    Ok(tarjan.components)
}

impl<N> Tarjan<'_, N>
where
    N: Copy + Eq + Hash + Ord + fmt::Debug,
{
    fn strongconnect(&mut self, v: N) -> Result<(), N> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            let Some(successors) = self.graph.get(&v) else {
                return Err(v);
            };
            let mut successors: Vec<N> = successors.iter().copied().collect();
            successors.sort_unstable();

            self.indices.insert(v, self.index_counter);
            self.lowlinks.insert(v, self.index_counter);
            self.index_counter += 1;

            self.stack.push(v);
            self.on_stack.insert(v);

            for w in successors {
                if let Some(&w_index) = self.indices.get(&w) {
                    if self.on_stack.contains(&w) {
                        self.lower(v, w_index);
                    }
                } else {
                    self.strongconnect(w)?;
                    let w_lowlink = self.lowlinks[&w];
                    self.lower(v, w_lowlink);
                }
            }

            // Root of SCC
            if self.lowlinks.get(&v) == self.indices.get(&v) {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack.remove(&w);
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                scc.sort_unstable();
                trace!(root = ?v, size = scc.len(), "emitting component");
                self.components.push(scc);
            }

            Ok(())
        })
    }

    fn lower(&mut self, v: N, candidate: u32) {
        if let Some(v_lowlink) = self.lowlinks.get_mut(&v) {
            *v_lowlink = (*v_lowlink).min(candidate);
        }
    }
}

#[cfg(test)]
#[path = "../tests/scc_tests.rs"]
mod tests;
