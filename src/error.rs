//! Error types for explorer-pager
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for explorer-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// A cursor that is not a base-10 non-negative integer
    #[error("Malformed cursor '{cursor}': expected a base-10 non-negative integer")]
    MalformedCursor {
        /// The raw cursor as received
        cursor: String,
    },

    /// A zero page size
    #[error("Invalid page size {value}: must be a positive integer")]
    InvalidPageSize {
        /// The rejected value
        value: u32,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A configuration or command-line value was rejected
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Name of the offending field
        field: String,
        /// Why it was rejected
        message: String,
    },

    /// A connection snapshot (or output) was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A named input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path as given
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else, usually an error with added context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed cursor error
    pub fn malformed_cursor(cursor: impl Into<String>) -> Self {
        Self::MalformedCursor {
            cursor: cursor.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error points at bad data handed over by the transport
    ///
    /// These signal an upstream data contract violation rather than a
    /// local misconfiguration. Only connection snapshots are ever parsed
    /// into `JsonParse`; config and variable parse failures map to
    /// `Config`/`InvalidConfigValue`.
    pub fn is_data_contract_violation(&self) -> bool {
        matches!(self, Error::MalformedCursor { .. } | Error::JsonParse(_))
    }
}

/// Result type alias for explorer-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_cursor("abc");
        assert_eq!(
            err.to_string(),
            "Malformed cursor 'abc': expected a base-10 non-negative integer"
        );

        let err = Error::InvalidPageSize { value: 0 };
        assert_eq!(
            err.to_string(),
            "Invalid page size 0: must be a positive integer"
        );

        let err = Error::invalid_value("page_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be positive"
        );
    }

    #[test]
    fn test_is_data_contract_violation() {
        assert!(Error::malformed_cursor("x").is_data_contract_violation());
        assert!(!Error::config("test").is_data_contract_violation());
        assert!(!Error::InvalidPageSize { value: 0 }.is_data_contract_violation());
        assert!(!Error::invalid_value("variables_json", "x").is_data_contract_violation());

        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert!(Error::from(json_err).is_data_contract_violation());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
