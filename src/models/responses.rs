//! Response DTOs from the classification backend
//!
//! Defines the structure of incoming HTTP response bodies.

use serde::{Deserialize, Serialize};

use super::Prediction;

/// Response body of `POST /classify`
///
/// Parsing is all-or-nothing: a single malformed prediction rejects the whole
/// body, and the classification fails with `ClassifyError::Parse` instead of
/// caching a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionsResponse {
    /// Class scores, highest first as sent by the backend
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// Response body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Whether the backend has a model ready
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            model_loaded: true,
        }
    }
}
