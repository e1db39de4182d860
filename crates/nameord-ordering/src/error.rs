//! Internal invariant violations.
//!
//! These are programming errors in whatever produced the inputs (the
//! environment or the definition batch), never user-facing conditions.
//! Illegal cycles are not errors: they are part of the ordering.

use crate::scc::TopsortError;
use nameord_common::Location;
use nameord_syntax::DefinitionKind;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderingError {
    /// A binding that is not its own provider has no registered providers.
    MissingProviders {
        binding: Location,
        kind: DefinitionKind,
    },
    /// The SCC walk looked for a node the graph does not contain.
    UnreachableRoot {
        root: Location,
        nodes: Vec<Location>,
        roots: Vec<Location>,
    },
}

impl fmt::Display for OrderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingError::MissingProviders { binding, kind } => write!(
                f,
                "{kind} at {binding} is not a provider of its name, but no providers are registered for it"
            ),
            OrderingError::UnreachableRoot { root, nodes, roots } => {
                write!(
                    f,
                    "dependency graph does not contain {root}\n  nodes ({}):",
                    nodes.len()
                )?;
                for node in nodes {
                    write!(f, " {node}")?;
                }
                write!(f, "\n  roots ({}):", roots.len())?;
                for root in roots {
                    write!(f, " {root}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for OrderingError {}

impl From<TopsortError<Location>> for OrderingError {
    fn from(err: TopsortError<Location>) -> Self {
        OrderingError::UnreachableRoot {
            root: err.missing,
            nodes: err.nodes,
            roots: err.roots,
        }
    }
}
