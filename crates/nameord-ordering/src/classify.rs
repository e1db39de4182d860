//! Element and component classification.
//!
//! A definition may take part in a cycle only if its type is fixed without
//! evaluating its own body or initializer: the resolver can then stand a
//! placeholder in for it while the rest of the cycle resolves.
//!
//! | Kind | Recursively resolvable |
//! |------|------------------------|
//! | Binding rooted at an annotation or a catch clause | yes |
//! | Binding rooted at a value, a for iterand or context | no |
//! | Update, OpAssign | no |
//! | Function, Class | when fully annotated |
//! | DeclaredClass, TypeAlias, OpaqueType, TypeParam, Interface | yes |
//! | Enum | no |
//! | Import | when type-only |

use crate::dependencies::DependencyMap;
use crate::graph::DependencyGraph;
use crate::ordering::{Component, CycleEdge, Element};
use nameord_common::{Location, LocationMap};
use nameord_syntax::{BindingRoot, Definition};
use tracing::debug;

pub fn recursively_resolvable(def: &Definition) -> bool {
    match def {
        Definition::Binding(shape) => {
            matches!(shape.root(), BindingRoot::Annotation(_) | BindingRoot::Catch)
        }
        Definition::Function {
            fully_annotated, ..
        }
        | Definition::Class {
            fully_annotated, ..
        } => *fully_annotated,
        Definition::DeclaredClass(_)
        | Definition::TypeAlias(_)
        | Definition::OpaqueType(_)
        | Definition::TypeParam(_)
        | Definition::Interface(_) => true,
        Definition::Import(import) => import.is_type_only(),
        Definition::Update { .. } | Definition::OpAssign { .. } | Definition::Enum(_) => false,
    }
}

pub(crate) struct Classifier<'a> {
    pub(crate) definitions: &'a LocationMap<Definition>,
    pub(crate) dependencies: &'a DependencyMap,
    pub(crate) graph: &'a DependencyGraph,
}

impl Classifier<'_> {
    fn resolvable(&self, loc: Location) -> bool {
        self.definitions
            .get(&loc)
            .is_some_and(recursively_resolvable)
    }

    /// Tag a location that forms a component on its own.
    pub(crate) fn element(&self, loc: Location) -> Element {
        if !self.graph.depends_on_itself(&loc) {
            Element::Normal(loc)
        } else if self.resolvable(loc) {
            Element::Resolvable(loc)
        } else {
            Element::Illegal(loc)
        }
    }

    /// Classify one strongly connected component, returning the edges to
    /// blame when it is illegal. `members` must be sorted.
    pub(crate) fn component(&self, members: Vec<Location>) -> (Component, Vec<CycleEdge>) {
        if let &[loc] = members.as_slice() {
            let element = self.element(loc);
            if let Element::Illegal(loc) = element {
                let kind = self.definitions.get(&loc).map(Definition::kind);
                debug!(%loc, ?kind, "illegal self-dependency");
                return (Component::Singleton(element), self.blame(&members));
            }
            return (Component::Singleton(element), Vec::new());
        }

        let elements: Vec<Element> = members
            .iter()
            .map(|&loc| {
                if self.resolvable(loc) {
                    Element::Resolvable(loc)
                } else {
                    Element::Illegal(loc)
                }
            })
            .collect();

        if elements.iter().all(|e| matches!(e, Element::Resolvable(_))) {
            return (Component::ResolvableScc(elements), Vec::new());
        }

        let blame = self.blame(&members);
        debug!(
            size = members.len(),
            first = %members[0],
            edges = blame.len(),
            "illegal cycle"
        );
        (Component::IllegalScc(elements), blame)
    }

    /// Edges between members of one component, with their evidence, ordered
    /// by source then target.
    fn blame(&self, members: &[Location]) -> Vec<CycleEdge> {
        let mut edges = Vec::new();
        for &from in members {
            let Some(deps) = self.dependencies.get(&from) else {
                continue;
            };
            for to in deps.targets() {
                if members.binary_search(&to).is_err() {
                    continue;
                }
                if let Some(evidence) = deps.evidence(&to) {
                    edges.push(CycleEdge {
                        from,
                        to,
                        evidence: evidence.to_vec(),
                    });
                }
            }
        }
        edges
    }
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
