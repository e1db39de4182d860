//! Dependency ordering for type resolution.
//!
//! Given a batch of definitions that may reference each other, this crate
//! decides the order in which the resolver has to compute their types, and
//! which cycles it can break with a placeholder.
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Use collection | [`collector`] | `DependencySet` per syntax fragment |
//! | Dependency building | [`builder`] | `DependencyMap` |
//! | Graph building | [`graph`] | `DependencyGraph` (dangling targets pruned) |
//! | Cycle decomposition | [`scc`] | components, dependency-first |
//! | Classification | [`classify`] | `Component`s and cycle blame |
//!
//! [`build_ordering`] runs the whole pipeline.
//!
//! ## Example
//!
//! ```ignore
//! // const y = 1; const x = y;
//! let env = EnvironmentMap::new()
//!     .declare(x)
//!     .declare(y)
//!     .with_write(y_read, y);
//! let ordering = build_ordering(&env, &definitions)?;
//! // [Singleton(Normal(y)), Singleton(Normal(x))]
//! ```

pub mod builder;
pub mod classify;
pub mod collector;
pub mod dependencies;
pub mod error;
pub mod graph;
pub mod ordering;
pub mod scc;
pub mod tracing_config;

pub use builder::{build_dependency_map, dependencies_of};
pub use classify::recursively_resolvable;
pub use collector::UseCollector;
pub use dependencies::{DependencyMap, DependencySet, Evidence};
pub use error::OrderingError;
pub use graph::DependencyGraph;
pub use ordering::{
    Component, CycleEdge, DefinitionOrdering, Element, OrderingStats, build_ordering,
};
pub use scc::{TopsortError, topsort};
