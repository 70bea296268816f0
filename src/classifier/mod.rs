//! Classifier Module
//!
//! The request seam between the result cache and the classification backend.

mod http;

use async_trait::async_trait;

use crate::error::ClassifyError;
use crate::models::ClassificationResult;

pub use http::HttpClassifier;

/// Turns raw image bytes into a classification result.
///
/// Implementations perform the actual round-trip; the service layer decides
/// whether a call is needed at all.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classifies one encoded image.
    async fn classify(&self, image: Vec<u8>) -> Result<ClassificationResult, ClassifyError>;

    /// Reports whether the backend is reachable and has a model loaded.
    async fn check_health(&self) -> bool {
        true
    }
}
