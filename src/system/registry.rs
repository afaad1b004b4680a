//! Pagination system registry
//!
//! Selection is deterministic: systems are sorted by priority once, at
//! construction, and the sorted list is shared read-only afterwards.

use super::types::PaginationSystem;
use crate::cursor::CursorPaginationSystem;
use crate::error::Result;
use crate::offset::OffsetPaginationSystem;
use crate::pagination::{unpaged, SharedPagination};
use crate::parameters::PaginationParameters;
use std::sync::{Arc, LazyLock};
use tracing::debug;

static SHARED: LazyLock<PaginationSystemRegistry> =
    LazyLock::new(PaginationSystemRegistry::with_defaults);

/// Ordered, immutable set of pagination systems
#[derive(Debug, Clone)]
pub struct PaginationSystemRegistry {
    systems: Arc<[Arc<dyn PaginationSystem>]>,
}

impl PaginationSystemRegistry {
    /// Create a registry from systems in registration order
    pub fn new<I>(systems: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn PaginationSystem>>,
    {
        let mut systems: Vec<_> = systems.into_iter().collect();
        // stable: equal priorities keep registration order
        systems.sort_by_key(|system| system.priority());
        Self {
            systems: systems.into(),
        }
    }

    /// Create a new registry builder
    pub fn builder() -> PaginationSystemRegistryBuilder {
        PaginationSystemRegistryBuilder::default()
    }

    /// Registry with the built-in offset and cursor systems
    pub fn with_defaults() -> Self {
        Self::builder()
            .register(OffsetPaginationSystem::new())
            .register(CursorPaginationSystem::new())
            .build()
    }

    /// Process-wide registry with the built-in systems
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Systems in selection order
    pub fn systems(&self) -> impl Iterator<Item = &dyn PaginationSystem> {
        self.systems
            .iter()
            .map(|system| &**system as &dyn PaginationSystem)
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Check if no system is registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// First system, in priority order, that matches the parameters
    pub fn select(&self, parameters: &PaginationParameters) -> Option<&dyn PaginationSystem> {
        let selected = self.systems().find(|system| system.matches(parameters));

        match selected {
            Some(system) => debug!(
                "Selected pagination system '{}' (priority {})",
                system.name(),
                system.priority()
            ),
            None => debug!("No pagination system matched, using unpaged"),
        }

        selected
    }

    /// Resolve parameters into a pagination
    ///
    /// Falls back to unpaged when nothing matches; errors from the selected
    /// system's `create` are returned as-is.
    pub fn resolve(&self, parameters: &PaginationParameters) -> Result<SharedPagination> {
        match self.select(parameters) {
            Some(system) => system.create(parameters),
            None => Ok(unpaged()),
        }
    }
}

impl Default for PaginationSystemRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Builder for a pagination system registry
#[derive(Debug, Default)]
pub struct PaginationSystemRegistryBuilder {
    systems: Vec<Arc<dyn PaginationSystem>>,
}

impl PaginationSystemRegistryBuilder {
    /// Register a system
    pub fn register<S: PaginationSystem + 'static>(mut self, system: S) -> Self {
        self.systems.push(Arc::new(system));
        self
    }

    /// Register an already shared system
    pub fn register_shared(mut self, system: Arc<dyn PaginationSystem>) -> Self {
        self.systems.push(system);
        self
    }

    /// Build the registry
    pub fn build(self) -> PaginationSystemRegistry {
        PaginationSystemRegistry::new(self.systems)
    }
}
