//! Classification result records
//!
//! A `ClassificationResult` is the value type stored in the result cache.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Classification Status ==
/// Lifecycle of a classification request as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassificationStatus {
    Idle,
    Processing,
    Success,
    Error,
    NoImage,
}

impl ClassificationStatus {
    /// Human-readable status line.
    pub fn message(&self) -> &'static str {
        match self {
            ClassificationStatus::Idle => "Ready to classify",
            ClassificationStatus::Processing => "Processing image...",
            ClassificationStatus::Success => "Classification successful",
            ClassificationStatus::Error => "Classification failed",
            ClassificationStatus::NoImage => "No image selected",
        }
    }
}

impl fmt::Display for ClassificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// == Prediction ==
/// A single class score returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Label of the predicted class
    pub class_name: String,
    /// Probability in `[0, 1]`
    pub confidence: f64,
    /// Index of the class in the model output
    pub class_id: u32,
}

impl Prediction {
    pub fn new(class_name: impl Into<String>, confidence: f64, class_id: u32) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
            class_id,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.class_name, self.confidence * 100.0)
    }
}

// == Classification Result ==
/// Predictions for one image plus the status and time they were produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Predictions in the order the backend returned them
    pub predictions: Vec<Prediction>,
    pub status: ClassificationStatus,
    pub timestamp: DateTime<Utc>,
}

impl ClassificationResult {
    /// Creates an empty result in the `Idle` state, stamped now.
    pub fn new() -> Self {
        Self {
            predictions: Vec::new(),
            status: ClassificationStatus::Idle,
            timestamp: Utc::now(),
        }
    }

    /// Creates a successful result from backend predictions.
    pub fn from_predictions(predictions: Vec<Prediction>) -> Self {
        Self {
            predictions,
            status: ClassificationStatus::Success,
            timestamp: Utc::now(),
        }
    }

    pub fn add_prediction(&mut self, class_name: impl Into<String>, confidence: f64, class_id: u32) {
        self.predictions
            .push(Prediction::new(class_name, confidence, class_id));
    }

    /// Returns the prediction with the highest confidence.
    pub fn top_prediction(&self) -> Option<&Prediction> {
        self.predictions
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self::new()
    }
}
