//! Error types for the gramdex index.

use thiserror::Error;

/// The main error type for gramdex operations.
#[derive(Error, Debug)]
pub enum GramdexError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for gramdex operations.
pub type Result<T> = std::result::Result<T, GramdexError>;
