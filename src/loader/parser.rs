//! Parser for registry definitions
//!
//! Parses and validates registry files. Files ending in `.json` are read as
//! JSON, everything else as YAML.

use crate::error::{Error, Result};
use crate::loader::types::{RegistryConfig, SystemDefinition};
use crate::system::PaginationSystemRegistry;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a registry from a YAML or JSON file
pub fn load_registry(path: impl AsRef<Path>) -> Result<PaginationSystemRegistry> {
    Ok(load_registry_config(path)?.build())
}

/// Load a registry from a YAML string
pub fn load_registry_from_str(yaml: &str) -> Result<PaginationSystemRegistry> {
    Ok(load_registry_config_from_str(yaml)?.build())
}

/// Load and validate a registry definition from a YAML or JSON file
pub fn load_registry_config(path: impl AsRef<Path>) -> Result<RegistryConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!("Registry file '{}' not found", path.display()))
        } else {
            Error::config(format!(
                "Failed to read registry file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        let config: RegistryConfig = serde_json::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse registry JSON '{}': {e}",
                path.display()
            ))
        })?;
        validate_registry(&config)?;
        config
    } else {
        load_registry_config_from_str(&content)?
    };

    debug!(
        "Loaded {} pagination system(s) from {}",
        config.systems.len(),
        path.display()
    );
    Ok(config)
}

/// Load and validate a registry definition from a YAML string
pub fn load_registry_config_from_str(yaml: &str) -> Result<RegistryConfig> {
    let config: RegistryConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse registry YAML: {e}")))?;

    validate_registry(&config)?;
    Ok(config)
}

/// Validate a registry definition
fn validate_registry(config: &RegistryConfig) -> Result<()> {
    if config.systems.is_empty() {
        return Err(Error::config("Registry must have at least one system"));
    }

    let mut seen = HashSet::new();
    for system in &config.systems {
        if !seen.insert(system.kind()) {
            return Err(Error::config(format!(
                "Duplicate pagination system: {}",
                system.kind()
            )));
        }
        validate_system(system)?;
    }

    Ok(())
}

/// Validate a system definition
fn validate_system(system: &SystemDefinition) -> Result<()> {
    if let SystemDefinition::Offset {
        default_limit,
        max_limit,
        ..
    } = system
    {
        if *default_limit == Some(0) {
            return Err(Error::config("Offset default_limit must be positive"));
        }
        if *max_limit == Some(0) {
            return Err(Error::config("Offset max_limit must be positive"));
        }
        if let (Some(default), Some(max)) = (default_limit, max_limit) {
            if default > max {
                return Err(Error::config(format!(
                    "Offset default_limit ({default}) exceeds max_limit ({max})"
                )));
            }
        }
    }

    Ok(())
}
