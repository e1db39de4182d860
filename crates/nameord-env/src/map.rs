//! In-memory environment.

use crate::environment::{Environment, ProviderInfo};
use crate::refinement::Refinement;
use nameord_common::{Location, LocationMap, LocationSet};

#[derive(Clone, Debug, Default)]
struct NameProviders {
    is_provider: bool,
    candidates: Vec<Location>,
}

/// An [`Environment`] backed by plain maps.
///
/// Built with chained `with_*` calls:
///
/// ```ignore
/// let env = EnvironmentMap::new()
///     .declare(x_decl)
///     .declare(y_decl)
///     .with_write(y_read_in_x_init, y_decl);
/// ```
///
/// A write recorded with [`with_write`](Self::with_write) provides itself
/// for both values and types unless [`with_providers`](Self::with_providers)
/// says otherwise.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentMap {
    reaching: LocationMap<Vec<Location>>,
    value_providers: LocationMap<Vec<Location>>,
    type_providers: LocationMap<Vec<Location>>,
    refinements: LocationMap<Vec<Refinement>>,
    names: LocationMap<NameProviders>,
    registered: LocationSet,
}

impl EnvironmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `location` as a declaration without provider information.
    pub fn register(mut self, location: Location) -> Self {
        self.registered.insert(location);
        self
    }

    /// Register `binding` as a declaration that provides its own name.
    pub fn declare(mut self, binding: Location) -> Self {
        self.registered.insert(binding);
        let entry = self.names.entry(binding).or_default();
        entry.is_provider = true;
        if !entry.candidates.contains(&binding) {
            entry.candidates.push(binding);
        }
        self
    }

    /// Register `binding` as a non-providing write to a name provided by
    /// `providers` (for example a reassignment `x = e` after `let x: T`).
    pub fn with_name_providers(
        mut self,
        binding: Location,
        providers: impl IntoIterator<Item = Location>,
    ) -> Self {
        self.registered.insert(binding);
        let entry = self.names.entry(binding).or_default();
        entry.is_provider = false;
        entry.candidates.extend(providers);
        self
    }

    /// Record that `write` reaches the read at `read`.
    pub fn with_write(mut self, read: Location, write: Location) -> Self {
        self.reaching.entry(read).or_default().push(write);
        self.value_providers
            .entry(write)
            .or_insert_with(|| vec![write]);
        self.type_providers.entry(write).or_insert_with(|| vec![write]);
        self
    }

    /// Replace the providers of `write` for values or for types.
    pub fn with_providers(
        mut self,
        write: Location,
        for_type: bool,
        providers: impl IntoIterator<Item = Location>,
    ) -> Self {
        let table = if for_type {
            &mut self.type_providers
        } else {
            &mut self.value_providers
        };
        table.insert(write, providers.into_iter().collect());
        self
    }

    /// Attach a refinement to `write`.
    pub fn with_refinement(mut self, write: Location, refinement: Refinement) -> Self {
        self.refinements.entry(write).or_default().push(refinement);
        self
    }
}

impl Environment for EnvironmentMap {
    fn reaching_writes(&self, read: Location) -> &[Location] {
        self.reaching.get(&read).map_or(&[], Vec::as_slice)
    }

    fn providers_of(&self, write: Location, for_type: bool) -> &[Location] {
        let table = if for_type {
            &self.type_providers
        } else {
            &self.value_providers
        };
        table.get(&write).map_or(&[], Vec::as_slice)
    }

    fn refinements_of(&self, write: Location) -> &[Refinement] {
        self.refinements.get(&write).map_or(&[], Vec::as_slice)
    }

    fn providers_of_name(&self, binding: Location) -> ProviderInfo<'_> {
        match self.names.get(&binding) {
            Some(names) => ProviderInfo {
                is_provider: names.is_provider,
                candidates: &names.candidates,
            },
            None => ProviderInfo::NONE,
        }
    }

    fn is_registered(&self, location: Location) -> bool {
        self.registered.contains(&location)
    }
}

#[cfg(test)]
#[path = "../tests/map_tests.rs"]
mod tests;
