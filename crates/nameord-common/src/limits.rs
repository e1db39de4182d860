//! Centralized limits and thresholds for the ordering engine.
//!
//! The engine is a pure fold over caller-provided syntax, so the only
//! resources it needs to guard are the call stack (syntax trees and
//! dependency graphs are walked recursively) and allocation sizes.
//!
//! # Categories
//!
//! - **Stack Limits**: When recursion gets close to the end of the current
//!   stack segment, traversal continues on a freshly allocated segment
//!   instead of overflowing.
//! - **Capacity Limits**: Inline sizes for small collections.

// =============================================================================
// Stack Limits
// =============================================================================

/// Remaining stack (in bytes) below which recursive traversals switch to a
/// new stack segment.
///
/// Used by the use collector for every expression, type, pattern and
/// statement it descends into, and by the SCC walk for every graph node.
///
/// # Example
///
/// ```text
/// // Deeply nested expressions recurse once per level:
/// const x = f(f(f(f(f(f(f(f(/* ... thousands of levels ... */))))))));
///
/// // Long dependency chains recurse once per definition in the SCC walk:
/// const a0 = 0; const a1 = a0; const a2 = a1; /* ... */ const a9999 = a9998;
/// ```
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size (in bytes) of each additional stack segment allocated once the red
/// zone is reached.
pub const STACK_GROWTH_SIZE: usize = 1024 * 1024;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for the evidence list attached to one dependency edge.
///
/// Most edges are justified by a single reference site, and almost all by
/// at most two (for example a read and a refinement guard on the same
/// name), so two inline slots avoid heap allocation in the common case.
pub const EVIDENCE_INLINE: usize = 2;
