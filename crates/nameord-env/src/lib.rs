//! Environment oracle for the nameord ordering engine.
//!
//! Name resolution and reaching-definitions analysis are performed by the
//! surrounding checker. The ordering engine only consumes their results
//! through the read-only [`Environment`] trait:
//! - which writes reach a read,
//! - which definitions provide the value or type of a write,
//! - which refinements guard a write,
//! - which declarations provide a name.
//!
//! [`EnvironmentMap`] is an in-memory implementation built up front, used by
//! tests, benches and embedders whose analysis already produced plain maps.

pub mod environment;
pub mod map;
pub mod refinement;

pub use environment::{Environment, ProviderInfo};
pub use map::EnvironmentMap;
pub use refinement::{PrimitiveKind, Refinement};
