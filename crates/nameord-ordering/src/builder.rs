//! Dependency builder: per-kind dispatch from definitions to dependency sets.
//!
//! | Kind | Contribution |
//! |------|--------------|
//! | Binding | binding shape, provider edges |
//! | Update | provider edges, reaching writes of the updated name |
//! | OpAssign | as Update, plus the right-hand side |
//! | Function | signature, body unless fully annotated |
//! | Class | heritage, decorators, type params, members by annotation state |
//! | DeclaredClass | type params, extends, mixins, implements, body |
//! | TypeAlias / OpaqueType / Interface / TypeParam | type params and type expressions |
//! | Enum / Import | nothing |

use crate::collector::UseCollector;
use crate::dependencies::{DependencyMap, DependencySet};
use crate::error::OrderingError;
use nameord_common::{Location, LocationMap};
use nameord_env::Environment;
use nameord_syntax::{BindingRoot, BindingShape, Definition, Selector};
use tracing::trace;

/// Collect the dependencies of every definition in the batch.
///
/// Definitions are visited in location order so that the first invariant
/// violation reported is the same on every run.
pub fn build_dependency_map<E: Environment + ?Sized>(
    env: &E,
    definitions: &LocationMap<Definition>,
) -> Result<DependencyMap, OrderingError> {
    let mut locations: Vec<Location> = definitions.keys().copied().collect();
    locations.sort_unstable();

    let mut map = DependencyMap::default();
    map.reserve(locations.len());
    for loc in locations {
        let Some(def) = definitions.get(&loc) else {
            continue;
        };
        let deps = dependencies_of(env, loc, def)?;
        trace!(%loc, kind = %def.kind(), dependencies = deps.len(), "collected dependencies");
        map.insert(loc, deps);
    }
    Ok(map)
}

/// Dependencies of the single definition `def` declared at `loc`.
pub fn dependencies_of<E: Environment + ?Sized>(
    env: &E,
    loc: Location,
    def: &Definition,
) -> Result<DependencySet, OrderingError> {
    let collector = UseCollector::new(env);
    let acc = DependencySet::new();

    let deps = match def {
        Definition::Binding(shape) => {
            let acc = provider_edges(env, loc, def, acc)?;
            binding_shape(&collector, acc, shape)
        }
        Definition::Update { .. } => {
            let acc = provider_edges(env, loc, def, acc)?;
            collector.read(acc, loc, false)
        }
        Definition::OpAssign { rhs, .. } => {
            let acc = provider_edges(env, loc, def, acc)?;
            let acc = collector.read(acc, loc, false);
            collector.expression(acc, rhs)
        }
        Definition::Function {
            fully_annotated,
            function,
        } => collector.function(acc, function, *fully_annotated),
        Definition::Class {
            fully_annotated,
            class,
        } => collector.class(acc, class, *fully_annotated),
        Definition::DeclaredClass(class) => {
            let acc = collector.type_params(acc, &class.type_params);
            let acc = match &class.extends {
                Some(extends) => collector.generic_type(acc, extends),
                None => acc,
            };
            let acc = collector.generic_types(acc, &class.mixins);
            let acc = collector.generic_types(acc, &class.implements);
            collector.object_type(acc, &class.body)
        }
        Definition::TypeAlias(alias) => {
            let acc = collector.type_params(acc, &alias.type_params);
            collector.type_node(acc, &alias.right)
        }
        Definition::OpaqueType(opaque) => {
            let acc = collector.type_params(acc, &opaque.type_params);
            let acc = collector.optional_type(acc, opaque.supertype.as_ref());
            collector.optional_type(acc, opaque.impl_type.as_ref())
        }
        Definition::TypeParam(param) => {
            let acc = collector.optional_type(acc, param.bound.as_ref());
            collector.optional_type(acc, param.default.as_ref())
        }
        Definition::Interface(interface) => {
            let acc = collector.type_params(acc, &interface.type_params);
            let acc = collector.generic_types(acc, &interface.extends);
            collector.object_type(acc, &interface.body)
        }
        Definition::Enum(_) | Definition::Import(_) => acc,
    };
    Ok(deps)
}

/// A write that does not provide its own name depends on the declarations
/// that do; their annotations fix the type it has to agree with.
fn provider_edges<E: Environment + ?Sized>(
    env: &E,
    loc: Location,
    def: &Definition,
    acc: DependencySet,
) -> Result<DependencySet, OrderingError> {
    let info = env.providers_of_name(loc);
    if info.is_provider {
        return Ok(acc);
    }
    if info.candidates.is_empty() {
        return Err(OrderingError::MissingProviders {
            binding: loc,
            kind: def.kind(),
        });
    }
    Ok(info
        .candidates
        .iter()
        .fold(acc, |acc, &provider| acc.with_edge(provider, loc)))
}

fn binding_shape<E: Environment + ?Sized>(
    collector: &UseCollector<'_, E>,
    acc: DependencySet,
    shape: &BindingShape,
) -> DependencySet {
    match shape {
        BindingShape::Root(root) => match root {
            BindingRoot::Value(e) | BindingRoot::For(_, e) => collector.expression(acc, e),
            BindingRoot::Annotation(_) | BindingRoot::Contextual | BindingRoot::Catch => acc,
        },
        BindingShape::Select { selector, inner } => {
            let acc = match selector {
                Selector::Computed(e) | Selector::Default(e) => collector.expression(acc, e),
                Selector::Element(_)
                | Selector::Property(_)
                | Selector::ObjectRest { .. }
                | Selector::ArrayRest(_) => acc,
            };
            binding_shape(collector, acc, inner)
        }
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
