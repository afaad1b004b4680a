//! Registry loader module
//!
//! Build a [`PaginationSystemRegistry`](crate::system::PaginationSystemRegistry)
//! from a YAML or JSON file.
//!
//! # Overview
//!
//! The loader module provides:
//! - `RegistryConfig` - Declarative list of pagination systems
//! - `SystemDefinition` - Per-system settings (priority, limits)
//! - YAML/JSON parsing with validation
//!
//! ```yaml
//! systems:
//!   - type: offset
//!     default_limit: 20
//!     max_limit: 100
//!   - type: cursor
//!     priority: -1
//! ```

mod parser;
mod types;

pub use parser::{
    load_registry, load_registry_config, load_registry_config_from_str, load_registry_from_str,
};
pub use types::{RegistryConfig, SystemDefinition};

#[cfg(test)]
mod tests;
