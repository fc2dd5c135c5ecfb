//! Layered error types
//!
//! Validation findings are never errors; these types cover internal faults
//! only.

use thiserror::Error;

/// Failure raised by a part-of-speech tagging capability
#[derive(Error, Debug)]
pub enum TaggerError {
    /// The tagging backend could not be loaded
    #[error("tagger unavailable: {0}")]
    Unavailable(String),

    /// Tagging a sentence failed
    #[error("tagging failed: {0}")]
    Failed(String),
}

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tagger failure during a validation call
    #[error("tagger error: {0}")]
    Tagger(#[from] TaggerError),

    /// Invalid rule configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
