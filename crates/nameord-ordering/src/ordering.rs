//! The ordering handed to the resolution pass.
//!
//! Components are listed dependency-first: every component comes after all
//! components it depends on. Locations inside a multi-member component are
//! listed in location order.

use crate::builder::build_dependency_map;
use crate::classify::Classifier;
use crate::error::OrderingError;
use crate::graph::DependencyGraph;
use crate::scc::topsort;
use nameord_common::{Location, LocationMap};
use nameord_env::Environment;
use nameord_syntax::Definition;
use serde::Serialize;
use tracing::{Level, debug, error, span};

/// A location tagged with its cycle status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    /// Not part of a cycle.
    Normal(Location),
    /// In a cycle, and its type is fixed without evaluating it.
    Resolvable(Location),
    /// In a cycle that cannot be broken at this definition.
    Illegal(Location),
}

impl Element {
    pub const fn location(self) -> Location {
        match self {
            Element::Normal(loc) | Element::Resolvable(loc) | Element::Illegal(loc) => loc,
        }
    }

    pub const fn is_illegal(self) -> bool {
        matches!(self, Element::Illegal(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Component {
    Singleton(Element),
    /// Every member is recursively resolvable.
    ResolvableScc(Vec<Element>),
    /// At least one member is not recursively resolvable.
    IllegalScc(Vec<Element>),
}

impl Component {
    pub fn elements(&self) -> &[Element] {
        match self {
            Component::Singleton(element) => std::slice::from_ref(element),
            Component::ResolvableScc(elements) | Component::IllegalScc(elements) => elements,
        }
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.elements().iter().map(|e| e.location())
    }

    pub fn len(&self) -> usize {
        self.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Whether the component is an illegal singleton or an illegal SCC.
    pub fn is_illegal(&self) -> bool {
        match self {
            Component::Singleton(element) => element.is_illegal(),
            Component::ResolvableScc(_) => false,
            Component::IllegalScc(_) => true,
        }
    }
}

/// A dependency inside an illegal cycle, with the references that created it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleEdge {
    pub from: Location,
    pub to: Location,
    pub evidence: Vec<Location>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OrderingStats {
    pub definitions: usize,
    pub edges: usize,
    pub singletons: usize,
    pub resolvable_sccs: usize,
    pub illegal_sccs: usize,
    pub illegal_singletons: usize,
    pub largest_component: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct DefinitionOrdering {
    components: Vec<Component>,
    /// Sorted by source, then target.
    blame: Vec<CycleEdge>,
    #[serde(skip)]
    index: LocationMap<usize>,
    #[serde(skip)]
    edge_count: usize,
}

impl DefinitionOrdering {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Every location, in resolution order.
    pub fn iter_locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.components.iter().flat_map(Component::locations)
    }

    pub fn component_of(&self, location: Location) -> Option<&Component> {
        self.index
            .get(&location)
            .and_then(|&i| self.components.get(i))
    }

    /// Position of the component containing `location`.
    pub fn position_of(&self, location: Location) -> Option<usize> {
        self.index.get(&location).copied()
    }

    /// Cycle edges leaving `location`. Empty unless `location` is part of an
    /// illegal component.
    pub fn blame(&self, location: Location) -> &[CycleEdge] {
        let start = self.blame.partition_point(|edge| edge.from < location);
        let end = self.blame.partition_point(|edge| edge.from <= location);
        &self.blame[start..end]
    }

    /// All cycle edges of illegal components.
    pub fn cycle_edges(&self) -> &[CycleEdge] {
        &self.blame
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn stats(&self) -> OrderingStats {
        let mut stats = OrderingStats {
            definitions: self.index.len(),
            edges: self.edge_count,
            ..OrderingStats::default()
        };
        for component in &self.components {
            match component {
                Component::Singleton(element) => {
                    stats.singletons += 1;
                    if element.is_illegal() {
                        stats.illegal_singletons += 1;
                    }
                }
                Component::ResolvableScc(_) => stats.resolvable_sccs += 1,
                Component::IllegalScc(_) => stats.illegal_sccs += 1,
            }
            stats.largest_component = stats.largest_component.max(component.len());
        }
        stats
    }

    /// Render components and cycle edges as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Order `definitions` for resolution.
///
/// Fails only on invariant violations in the inputs: a non-providing write
/// whose name has no registered providers, or a graph the SCC walk cannot
/// cover. Illegal cycles are reported in the ordering itself.
pub fn build_ordering<E: Environment + ?Sized>(
    env: &E,
    definitions: &LocationMap<Definition>,
) -> Result<DefinitionOrdering, OrderingError> {
    let _span = span!(Level::DEBUG, "build_ordering", definitions = definitions.len()).entered();

    let dependencies = build_dependency_map(env, definitions).inspect_err(|err| {
        error!(%err, "failed to collect dependencies");
    })?;
    let graph = DependencyGraph::from_dependencies(&dependencies);
    let roots = graph.nodes();
    let sccs = topsort(&roots, graph.adjacency())
        .map_err(OrderingError::from)
        .inspect_err(|err| {
            error!(%err, "dependency graph is inconsistent");
        })?;

    let classifier = Classifier {
        definitions,
        dependencies: &dependencies,
        graph: &graph,
    };

    let mut components = Vec::with_capacity(sccs.len());
    let mut blame = Vec::new();
    let mut index = LocationMap::default();
    index.reserve(roots.len());
    for members in sccs {
        for &loc in &members {
            index.insert(loc, components.len());
        }
        let (component, edges) = classifier.component(members);
        components.push(component);
        blame.extend(edges);
    }
    blame.sort_by(|a, b| (a.from, a.to).cmp(&(b.from, b.to)));

    let ordering = DefinitionOrdering {
        components,
        blame,
        index,
        edge_count: graph.edge_count(),
    };
    let stats = ordering.stats();
    debug!(
        components = ordering.len(),
        edges = stats.edges,
        illegal = stats.illegal_sccs + stats.illegal_singletons,
        "ordering built"
    );
    Ok(ordering)
}

#[cfg(test)]
#[path = "../tests/ordering_tests.rs"]
mod tests;
