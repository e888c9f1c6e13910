//! Error types for calendar layout and rendering

use thiserror::Error;

/// Result type alias for calendar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, rendering or persisting a calendar
#[derive(Error, Debug)]
pub enum Error {
    /// A caller handed the core inputs it promised never to pass
    /// (non-Monday grid start, malformed variant parameters)
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    /// Degenerate geometry or page configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// User supplied start date that cannot be used
    #[error("{0}")]
    InvalidDate(String),

    /// Interactive input that can never become valid (closed stdin etc.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to write a document or read a prompt answer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file or display list (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
