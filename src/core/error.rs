//! Error types and error handling for the Obsidian bridge.
//!
//! This module defines the error types used throughout the application.
//! Protocol-specific error handling (MCP error codes) is handled in the
//! MCP adapter module.

use thiserror::Error;

/// Result type alias for Obsidian operations
pub type Result<T> = std::result::Result<T, ObsidianError>;

/// Main error type for the Obsidian bridge
#[derive(Error, Debug)]
pub enum ObsidianError {
    /// Missing or invalid configuration (no API key, bad client setup).
    /// Fatal for the current call, never retried.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The REST plugin could not be reached at all (connection refused,
    /// TLS failure, timeout). Distinct from an HTTP-status error.
    #[error("Connection error: {0}")]
    Connection(reqwest::Error),

    /// The plugin answered, but the body did not decode as expected
    #[error("Invalid response body: {0}")]
    BadResponse(reqwest::Error),

    /// 404 from the plugin, with the upstream error body when present
    #[error("Error {error_code}: {message}")]
    NotFound { error_code: i64, message: String },

    /// 409 from the plugin (e.g. rename/move destination already exists)
    #[error("Error {error_code}: {message}")]
    Conflict { error_code: i64, message: String },

    /// Any other non-2xx response
    #[error("Error {error_code}: {message} (HTTP {status})")]
    Status {
        status: u16,
        error_code: i64,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ObsidianError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ObsidianError::NotFound { .. })
    }

    /// Check if this is a conflict error (destination already exists)
    pub fn is_conflict(&self) -> bool {
        matches!(self, ObsidianError::Conflict { .. })
    }

    /// Check if this is a connection-level failure (unreachable, timeout)
    pub fn is_connection(&self) -> bool {
        matches!(self, ObsidianError::Connection(_))
    }
}

// Split transport failures from body-decode failures so callers can tell
// "plugin unreachable" apart from "plugin answered garbage".
impl From<reqwest::Error> for ObsidianError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ObsidianError::BadResponse(err)
        } else {
            ObsidianError::Connection(err)
        }
    }
}
