//! The oracle interface.

use crate::refinement::Refinement;
use nameord_common::Location;

/// Provider information for one binding location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProviderInfo<'a> {
    /// The binding is itself one of the declarations providing its name.
    pub is_provider: bool,
    /// Declarations providing the name. Empty when nothing is registered.
    pub candidates: &'a [Location],
}

impl ProviderInfo<'_> {
    pub const NONE: ProviderInfo<'static> = ProviderInfo {
        is_provider: false,
        candidates: &[],
    };
}

/// Read-only view of name resolution results.
///
/// All lookups are total: an unknown location yields an empty answer rather
/// than an error. Returned slices have set semantics; the ordering engine
/// never relies on their order or on the absence of duplicates.
pub trait Environment {
    /// Writes whose value may be observed by the read at `read`.
    fn reaching_writes(&self, read: Location) -> &[Location];

    /// Definitions providing the value (`for_type == false`) or the type
    /// (`for_type == true`) of the write at `write`.
    fn providers_of(&self, write: Location, for_type: bool) -> &[Location];

    /// Refinements guarding the write at `write`.
    fn refinements_of(&self, write: Location) -> &[Refinement];

    /// Provider information for the binding declared at `binding`.
    fn providers_of_name(&self, binding: Location) -> ProviderInfo<'_>;

    /// Whether `location` is a declaration the environment tracks.
    ///
    /// Ambiguous or unresolved declarations are not registered.
    fn is_registered(&self, location: Location) -> bool;
}
