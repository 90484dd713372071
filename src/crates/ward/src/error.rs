//! Error types for Ward
//!
//! Provides a unified error type for all Ward operations.

use thiserror::Error;

/// Result type alias for Ward operations
pub type Result<T> = std::result::Result<T, WardError>;

/// Main error type for Ward operations
#[derive(Debug, Error)]
pub enum WardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Location lookup error
    #[error("Location error: {0}")]
    Location(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
