//! Error types for the classifier cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the result cache.
///
/// Lookups never fail; absence is reported as `None`. The only failure mode
/// is building a cache with an unusable capacity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Invalid construction parameters
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// == Classify Error Enum ==
/// Errors raised while obtaining a classification for an image.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The image could not be read from disk
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Server returned error: {0}")]
    Status(u16),

    /// The response body was not a valid predictions document
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// A worker task ended without producing a result
    #[error("Worker task failed: {0}")]
    Join(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
