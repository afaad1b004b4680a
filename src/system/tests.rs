//! Tests for pagination system registry

use super::*;
use crate::error::{Error, Result};
use crate::pagination::{limit, Reference, SharedPagination};
use crate::parameters::PaginationParameters;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Matches a fixed key and produces a fixed page limit
#[derive(Debug)]
struct KeySystem {
    name: &'static str,
    key: &'static str,
    limit: u32,
    priority: i32,
}

impl KeySystem {
    fn new(name: &'static str, key: &'static str, limit: u32, priority: i32) -> Self {
        Self {
            name,
            key,
            limit,
            priority,
        }
    }
}

impl PaginationSystem for KeySystem {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, parameters: &PaginationParameters) -> bool {
        parameters.contains_key(self.key)
    }

    fn create(&self, _parameters: &PaginationParameters) -> Result<SharedPagination> {
        Ok(limit(self.limit))
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Always matches and always rejects its input
#[derive(Debug)]
struct RejectingSystem;

impl PaginationSystem for RejectingSystem {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn matches(&self, _parameters: &PaginationParameters) -> bool {
        true
    }

    fn create(&self, _parameters: &PaginationParameters) -> Result<SharedPagination> {
        Err(Error::invalid_cursor("rejected"))
    }
}

/// Counts how often it is asked to create
#[derive(Debug, Default)]
struct CountingSystem {
    created: AtomicUsize,
}

impl PaginationSystem for CountingSystem {
    fn name(&self) -> &str {
        "counting"
    }

    fn matches(&self, parameters: &PaginationParameters) -> bool {
        parameters.contains_key("count")
    }

    fn create(&self, _parameters: &PaginationParameters) -> Result<SharedPagination> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(limit(1))
    }
}

fn params(query: &str) -> PaginationParameters {
    PaginationParameters::from_query(query)
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_systems_sorted_by_priority() {
    let registry = PaginationSystemRegistry::builder()
        .register(KeySystem::new("late", "a", 1, 10))
        .register(KeySystem::new("early", "a", 2, -5))
        .register(KeySystem::new("middle", "a", 3, 0))
        .build();

    let names: Vec<_> = registry.systems().map(|s| s.name()).collect();
    assert_eq!(names, vec!["early", "middle", "late"]);
}

#[test]
fn test_lowest_priority_match_wins() {
    let registry = PaginationSystemRegistry::builder()
        .register(KeySystem::new("late", "a", 1, 10))
        .register(KeySystem::new("early", "a", 2, -5))
        .build();

    let selected = registry.select(&params("a=1")).unwrap();
    assert_eq!(selected.name(), "early");
    assert_eq!(registry.resolve(&params("a=1")).unwrap().limit(), Some(2));
}

#[test]
fn test_ties_keep_registration_order() {
    let registry = PaginationSystemRegistry::builder()
        .register(KeySystem::new("first", "a", 1, 0))
        .register(KeySystem::new("second", "a", 2, 0))
        .build();

    assert_eq!(registry.select(&params("a")).unwrap().name(), "first");
}

#[test]
fn test_non_matching_systems_are_skipped() {
    let registry = PaginationSystemRegistry::builder()
        .register(KeySystem::new("a", "a", 1, -1))
        .register(KeySystem::new("b", "b", 2, 0))
        .build();

    assert_eq!(registry.select(&params("b=x")).unwrap().name(), "b");
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[test]
fn test_no_match_resolves_to_unpaged() {
    let registry = PaginationSystemRegistry::builder()
        .register(KeySystem::new("a", "a", 1, 0))
        .build();

    assert!(registry.select(&params("z=1")).is_none());
    assert!(registry.resolve(&params("z=1")).unwrap().is_unpaged());
}

#[test]
fn test_empty_registry_resolves_to_unpaged() {
    let registry = PaginationSystemRegistry::new(Vec::new());
    assert!(registry.is_empty());
    assert!(registry.resolve(&params("offset=5")).unwrap().is_unpaged());
}

#[test]
fn test_create_failure_propagates() {
    let registry = PaginationSystemRegistry::builder()
        .register(RejectingSystem)
        .build();

    let err = registry.resolve(&params("anything")).unwrap_err();
    assert!(matches!(err, Error::InvalidCursor { .. }));
}

#[test]
fn test_create_only_called_on_winner() {
    let counting = Arc::new(CountingSystem::default());
    let registry = PaginationSystemRegistry::builder()
        .register(KeySystem::new("first", "count", 1, -1))
        .register_shared(counting.clone())
        .build();

    registry.resolve(&params("count=1")).unwrap();
    assert_eq!(counting.created.load(Ordering::SeqCst), 0);
}

// ============================================================================
// Default Registry Tests
// ============================================================================

#[test]
fn test_default_registry_systems() {
    let registry = PaginationSystemRegistry::with_defaults();
    let names: Vec<_> = registry.systems().map(|s| s.name()).collect();
    assert_eq!(names, vec!["offset", "cursor"]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_default_registry_prefers_offset_on_tie() {
    let registry = PaginationSystemRegistry::default();
    let pagination = registry.resolve(&params("offset=5&cursor=")).unwrap();
    assert_eq!(pagination.reference(), Some(Reference::Offset(5)));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = PaginationSystemRegistry::shared().clone();

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let query = format!("offset={}&limit=10", i * 10);
                registry
                    .resolve(&PaginationParameters::from_query(&query))
                    .unwrap()
                    .reference()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            Some(Reference::Offset(i as u64 * 10))
        );
    }
}
