//! Error types for Persona

use thiserror::Error;

/// Result type alias for Persona operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Persona operations
///
/// Plan parsing never produces one of these; malformed plan text degrades to
/// fewer days or exercises instead.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A workout draft failed validation
    #[error("Invalid workout: {0}")]
    Validation(String),

    /// No parsed day carries the requested number
    #[error("Day {0} not found in plan")]
    DayNotFound(u32),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
