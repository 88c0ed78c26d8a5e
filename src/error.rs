//! Error types for passguard.
//!
//! The policy analysis engine itself is total and returns plain values; the
//! error surface of the crate is confined to configuration and vault
//! persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for passguard.
#[derive(Error, Debug)]
pub enum Error {
    /// Error in the vault persistence layer
    #[error("Storage error: {message}")]
    Storage {
        /// Detailed error message
        message: String,
        /// Vault file involved, if applicable
        path: Option<PathBuf>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Detailed error message
        message: String,
        /// Configuration key that caused the error
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected condition)
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed error message
        message: String,
    },
}

impl Error {
    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Error::Storage {
            message: message.into(),
            path: None,
        }
    }

    /// Create a storage error with file context.
    pub fn storage_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::Storage {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: None,
        }
    }

    /// Create a configuration error with key context.
    pub fn config_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Storage { .. } => "storage",
            Error::Config { .. } => "config",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
            Error::Internal { .. } => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::storage("vault unavailable");
        assert!(matches!(err, Error::Storage { .. }));
        assert_eq!(err.category(), "storage");
    }

    #[test]
    fn test_error_display() {
        let err = Error::config_key("invalid value", "generator.default_length");
        assert!(err.to_string().contains("invalid value"));

        let err = Error::storage_at("write failed", "/tmp/vault.jsonl");
        assert!(err.to_string().contains("write failed"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.category(), "io");
    }
}
