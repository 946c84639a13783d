//! Error types for cinelog.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cinelog.
#[derive(Error, Debug)]
pub enum Error {
    // Storage errors
    #[error("Storage is full, could not write slot: {0}")]
    StorageFull(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    // Lookup errors (raised by the CLI, never by the store)
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    // Input errors
    #[error("Invalid input: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Config errors
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a validation error from a string.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
}
