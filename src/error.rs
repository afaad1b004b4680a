//! Error types for slice-pagination
//!
//! Malformed request parameters are never errors: they fall back to defaults.
//! The variants here cover the few places where a hard failure is wanted,
//! plus the configuration loader and the CLI.

use thiserror::Error;

/// The main error type for slice-pagination
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    // ============================================================================
    // Strategy Errors
    // ============================================================================
    #[error("Invalid cursor: {message}")]
    InvalidCursor { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Create an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by client input
    ///
    /// A web layer maps these to a 4xx-class response.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidCursor { .. })
    }
}

/// Result type alias for slice-pagination
pub type Result<T> = std::result::Result<T, Error>;
