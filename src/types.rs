//! Common types used throughout slice-pagination
//!
//! This module contains shared type aliases and small utility types used
//! across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Canonical wire encoding of a pagination, ordered by parameter name
pub type ParameterMap = BTreeMap<String, JsonValue>;

/// Raw request parameters, one or more values per name
pub type MultiValueMap = HashMap<String, Vec<String>>;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Render a parameter value as query-string values
///
/// Arrays expand to one value per element, `null` yields nothing.
pub fn query_values(value: &JsonValue) -> Vec<String> {
    match value {
        JsonValue::Null => Vec::new(),
        JsonValue::String(s) => vec![s.clone()],
        JsonValue::Array(items) => items.iter().flat_map(query_values).collect(),
        other => vec![other.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_values_scalars() {
        assert_eq!(query_values(&json!(20)), vec!["20".to_string()]);
        assert_eq!(query_values(&json!("abc")), vec!["abc".to_string()]);
        assert_eq!(query_values(&json!(true)), vec!["true".to_string()]);
        assert!(query_values(&JsonValue::Null).is_empty());
    }

    #[test]
    fn test_query_values_array() {
        assert_eq!(
            query_values(&json!(["a", 1, null])),
            vec!["a".to_string(), "1".to_string()]
        );
    }

    #[test]
    fn test_log_level_into_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::default()), tracing::Level::INFO);
    }
}
