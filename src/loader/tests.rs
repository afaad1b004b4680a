//! Tests for registry loader module

use super::*;
use crate::error::Error;
use crate::pagination::Reference;
use crate::parameters::PaginationParameters;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn params(query: &str) -> PaginationParameters {
    PaginationParameters::from_query(query)
}

fn temp_file(suffix: &str) -> NamedTempFile {
    tempfile::Builder::new().suffix(suffix).tempfile().unwrap()
}

fn config_message(err: Error) -> String {
    match err {
        Error::Config { message } => message,
        other => panic!("Expected config error, got {other:?}"),
    }
}

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_full_definition() {
    let yaml = r#"
systems:
  - type: offset
    default_limit: 20
    max_limit: 100
  - type: cursor
    priority: -1
"#;

    let config = load_registry_config_from_str(yaml).unwrap();
    assert_eq!(
        config.systems,
        vec![
            SystemDefinition::Offset {
                priority: 0,
                default_limit: Some(20),
                max_limit: Some(100),
            },
            SystemDefinition::Cursor { priority: -1 },
        ]
    );
}

#[test]
fn test_load_defaults_fields() {
    let yaml = r#"
systems:
  - type: offset
"#;

    let config = load_registry_config_from_str(yaml).unwrap();
    assert_eq!(
        config.systems[0],
        SystemDefinition::Offset {
            priority: 0,
            default_limit: None,
            max_limit: None,
        }
    );
    assert_eq!(config.systems[0].kind(), "offset");
}

#[test]
fn test_defaults_config_matches_builtin_registry() {
    let registry = RegistryConfig::defaults().build();
    let names: Vec<_> = registry.systems().map(|s| s.name()).collect();
    assert_eq!(names, vec!["offset", "cursor"]);
}

// ============================================================================
// Registry Building Tests
// ============================================================================

#[test]
fn test_built_registry_applies_priority() {
    let yaml = r#"
systems:
  - type: offset
    priority: 5
  - type: cursor
    priority: -1
"#;

    let registry = load_registry_from_str(yaml).unwrap();
    let names: Vec<_> = registry.systems().map(|s| s.name()).collect();
    assert_eq!(names, vec!["cursor", "offset"]);

    let pagination = registry.resolve(&params("offset=10&cursor=")).unwrap();
    assert!(pagination.is_first_page());
    assert_eq!(pagination.reference(), None);
}

#[test]
fn test_built_registry_applies_limits() {
    let yaml = r#"
systems:
  - type: offset
    default_limit: 25
    max_limit: 50
"#;

    let registry = load_registry_from_str(yaml).unwrap();

    let pagination = registry.resolve(&params("offset=0")).unwrap();
    assert_eq!(pagination.limit(), Some(25));

    let pagination = registry.resolve(&params("offset=0&limit=1000")).unwrap();
    assert_eq!(pagination.limit(), Some(50));

    // cursor is not configured
    let pagination = registry.resolve(&params("cursor=")).unwrap();
    assert!(pagination.is_unpaged());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_empty_registry_rejected() {
    let err = load_registry_config_from_str("systems: []").unwrap_err();
    assert_eq!(config_message(err), "Registry must have at least one system");

    let err = load_registry_config_from_str("{}").unwrap_err();
    assert_eq!(config_message(err), "Registry must have at least one system");
}

#[test]
fn test_duplicate_system_rejected() {
    let yaml = r#"
systems:
  - type: cursor
  - type: cursor
    priority: 3
"#;

    let err = load_registry_config_from_str(yaml).unwrap_err();
    assert_eq!(config_message(err), "Duplicate pagination system: cursor");
}

#[test]
fn test_zero_limits_rejected() {
    let err = load_registry_config_from_str("systems: [{type: offset, default_limit: 0}]")
        .unwrap_err();
    assert_eq!(config_message(err), "Offset default_limit must be positive");

    let err =
        load_registry_config_from_str("systems: [{type: offset, max_limit: 0}]").unwrap_err();
    assert_eq!(config_message(err), "Offset max_limit must be positive");
}

#[test]
fn test_default_above_max_rejected() {
    let yaml = "systems: [{type: offset, default_limit: 200, max_limit: 100}]";
    let err = load_registry_config_from_str(yaml).unwrap_err();
    assert_eq!(
        config_message(err),
        "Offset default_limit (200) exceeds max_limit (100)"
    );
}

#[test]
fn test_unknown_system_type_rejected() {
    let err = load_registry_config_from_str("systems: [{type: keyset}]").unwrap_err();
    assert!(config_message(err).starts_with("Failed to parse registry YAML"));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_yaml_file() {
    let mut file = temp_file(".yaml");
    writeln!(file, "systems:\n  - type: cursor\n    priority: 2").unwrap();

    let config = load_registry_config(file.path()).unwrap();
    assert_eq!(config.systems, vec![SystemDefinition::Cursor { priority: 2 }]);
}

#[test]
fn test_load_json_file() {
    let mut file = temp_file(".json");
    write!(
        file,
        r#"{{"systems": [{{"type": "offset", "max_limit": 10}}, {{"type": "cursor"}}]}}"#
    )
    .unwrap();

    let registry = load_registry(file.path()).unwrap();
    assert_eq!(registry.len(), 2);

    let pagination = registry.resolve(&params("offset=30&limit=99")).unwrap();
    assert_eq!(pagination.reference(), Some(Reference::Offset(30)));
    assert_eq!(pagination.limit(), Some(10));
}

#[test]
fn test_load_invalid_json_file() {
    let mut file = temp_file(".json");
    write!(file, "{{ not json").unwrap();

    let err = load_registry_config(file.path()).unwrap_err();
    assert!(config_message(err).starts_with("Failed to parse registry JSON"));
}

#[test]
fn test_load_json_file_is_validated() {
    let mut file = temp_file(".json");
    write!(file, r#"{{"systems": []}}"#).unwrap();

    let err = load_registry_config(file.path()).unwrap_err();
    assert_eq!(config_message(err), "Registry must have at least one system");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.yaml");

    let err = load_registry(&path).unwrap_err();
    assert_eq!(
        config_message(err),
        format!("Registry file '{}' not found", path.display())
    );
}
