//! Classification models and wire DTOs
//!
//! This module defines the result records kept in the cache and the
//! JSON documents exchanged with the classification backend.

pub mod classification;
pub mod responses;

// Re-export commonly used types
pub use classification::{ClassificationResult, ClassificationStatus, Prediction};
pub use responses::{HealthResponse, PredictionsResponse};
