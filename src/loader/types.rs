//! Loader types
//!
//! Declarative registry definition types for YAML/JSON parsing.

use crate::cursor::CursorPaginationSystem;
use crate::offset::OffsetPaginationSystem;
use crate::system::{PaginationSystem, PaginationSystemRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Registry Definition
// ============================================================================

/// Top-level registry definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegistryConfig {
    /// Systems in registration order
    #[serde(default)]
    pub systems: Vec<SystemDefinition>,
}

impl RegistryConfig {
    /// The built-in systems with default settings
    pub fn defaults() -> Self {
        Self {
            systems: vec![
                SystemDefinition::Offset {
                    priority: 0,
                    default_limit: None,
                    max_limit: None,
                },
                SystemDefinition::Cursor { priority: 0 },
            ],
        }
    }

    /// Build a registry from this definition
    pub fn build(&self) -> PaginationSystemRegistry {
        PaginationSystemRegistry::new(self.systems.iter().map(SystemDefinition::build))
    }
}

// ============================================================================
// System Definition
// ============================================================================

/// Pagination system definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SystemDefinition {
    /// `offset`/`limit` parameters
    #[serde(rename = "offset")]
    Offset {
        /// Selection priority, lower first
        #[serde(default)]
        priority: i32,
        /// Page size used when none is requested
        #[serde(default)]
        default_limit: Option<u32>,
        /// Upper bound on requested page sizes
        #[serde(default)]
        max_limit: Option<u32>,
    },
    /// `cursor`/`limit` parameters
    #[serde(rename = "cursor")]
    Cursor {
        /// Selection priority, lower first
        #[serde(default)]
        priority: i32,
    },
}

impl SystemDefinition {
    /// Type tag of this definition
    pub fn kind(&self) -> &'static str {
        match self {
            SystemDefinition::Offset { .. } => "offset",
            SystemDefinition::Cursor { .. } => "cursor",
        }
    }

    /// Instantiate the system
    pub fn build(&self) -> Arc<dyn PaginationSystem> {
        match self {
            SystemDefinition::Offset {
                priority,
                default_limit,
                max_limit,
            } => Arc::new(OffsetPaginationSystem {
                priority: *priority,
                default_limit: *default_limit,
                max_limit: *max_limit,
            }),
            SystemDefinition::Cursor { priority } => {
                Arc::new(CursorPaginationSystem::new().with_priority(*priority))
            }
        }
    }
}
