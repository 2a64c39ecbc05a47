//! Unified error types for the enmix libraries.
//!
//! [`CoreError`] gives the generator and its callers a common representation
//! for configuration and validation failures, so the CLI can handle them
//! uniformly at its boundary.

use thiserror::Error;

/// Unified error type for core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors (e.g., inverted year ranges)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for CoreError {
    fn from(err: anyhow::Error) -> Self {
        CoreError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for CoreError {
    fn from(s: String) -> Self {
        CoreError::Other(s)
    }
}

impl From<&str> for CoreError {
    fn from(s: &str) -> Self {
        CoreError::Other(s.to_string())
    }
}
