//! Common types and utilities for the nameord definition ordering engine.
//!
//! This crate provides foundational types used across all nameord crates:
//! - Source locations (`Location`, `SourceId`), the universal key for
//!   definitions, dependency edges and evidence
//! - Centralized limits for recursive syntax traversal

// Location - opaque, totally ordered source positions
pub mod location;
pub use location::{Location, LocationMap, LocationSet, SourceId};

// Centralized limits and thresholds
pub mod limits;
