use super::*;
use crate::dependencies::DependencySet;
use nameord_common::SourceId;

fn loc(offset: u32) -> Location {
    Location::new(SourceId(0), offset, offset + 1)
}

fn map(entries: Vec<(u32, Vec<u32>)>) -> DependencyMap {
    entries
        .into_iter()
        .map(|(node, targets)| {
            let deps = targets
                .into_iter()
                .fold(DependencySet::new(), |deps, t| deps.with_edge(loc(t), loc(100 + t)));
            (loc(node), deps)
        })
        .collect()
}

#[test]
fn dangling_targets_are_pruned() {
    let graph = DependencyGraph::from_dependencies(&map(vec![(1, vec![2, 99]), (2, vec![])]));

    assert_eq!(graph.nodes(), vec![loc(1), loc(2)]);
    assert_eq!(graph.successors(&loc(1)).map(|s| s.len()), Some(1));
    assert!(graph.successors(&loc(99)).is_none());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn every_definition_is_a_node_even_without_edges() {
    let graph = DependencyGraph::from_dependencies(&map(vec![(3, vec![]), (1, vec![]), (2, vec![])]));
    assert_eq!(graph.nodes(), vec![loc(1), loc(2), loc(3)]);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn self_dependency_is_detected() {
    let graph = DependencyGraph::from_dependencies(&map(vec![(1, vec![1, 2]), (2, vec![1])]));
    assert!(graph.depends_on_itself(&loc(1)));
    assert!(!graph.depends_on_itself(&loc(2)));
    assert!(!graph.depends_on_itself(&loc(3)));
}
