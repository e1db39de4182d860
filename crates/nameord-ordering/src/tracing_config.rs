//! Tracing configuration for debugging orderings.
//!
//! Supports three output formats controlled by `NAMEORD_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` output
//! - `tree`: hierarchical indented output via `tracing-tree`, one level per
//!   `build_ordering` span
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Which definitions form illegal cycles, as a tree
//! NAMEORD_LOG=debug NAMEORD_LOG_FORMAT=tree cargo test -p nameord-ordering
//!
//! # Every collected edge and emitted component
//! NAMEORD_LOG="nameord_ordering=trace" NAMEORD_LOG_FORMAT=json cargo test
//! ```
//!
//! The subscriber is only installed when `NAMEORD_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `NAMEORD_LOG_FORMAT` value. Unknown values select `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("NAMEORD_LOG_FORMAT").unwrap_or_default())
    }
}

/// `NAMEORD_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("NAMEORD_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global tracing subscriber.
///
/// Does nothing when neither `NAMEORD_LOG` nor `RUST_LOG` is set. Safe to
/// call more than once (every test may call it); only the first call that
/// finds a log variable installs a subscriber. Output goes to stderr.
pub fn init_tracing() {
    let has_nameord_log = std::env::var("NAMEORD_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_nameord_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let format = LogFormat::from_env();

    // `try_init` fails once a subscriber is installed; later calls are no-ops.
    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    };
    if installed {
        tracing::debug!(?format, "tracing initialised");
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
