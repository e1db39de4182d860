use super::*;
use nameord_common::SourceId;

fn loc(offset: u32) -> Location {
    Location::new(SourceId(0), offset, offset + 1)
}

#[test]
fn evidence_keeps_discovery_order_without_duplicates() {
    let deps = DependencySet::new()
        .with_edge(loc(1), loc(10))
        .with_edge(loc(1), loc(20))
        .with_edge(loc(1), loc(10))
        .with_edge(loc(2), loc(30));

    assert_eq!(deps.len(), 2);
    assert_eq!(deps.evidence(&loc(1)), Some(&[loc(10), loc(20)][..]));
    assert_eq!(deps.evidence(&loc(2)), Some(&[loc(30)][..]));
    assert_eq!(deps.evidence(&loc(3)), None);
}

#[test]
fn targets_are_sorted() {
    let deps = DependencySet::new()
        .with_edge(loc(9), loc(0))
        .with_edge(loc(3), loc(0))
        .with_edge(loc(5), loc(0));
    assert_eq!(deps.targets(), vec![loc(3), loc(5), loc(9)]);
}

#[test]
fn refinements_are_explored_once_per_write() {
    let mut deps = DependencySet::new();
    assert!(deps.start_refinements(loc(4)));
    assert!(!deps.start_refinements(loc(4)));
    assert!(deps.is_empty());
}
