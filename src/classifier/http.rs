//! HTTP Classifier
//!
//! Talks to the classification backend over its two endpoints:
//! - `POST /classify` - raw image bytes in, predictions JSON out
//! - `GET /health` - status document, ready once the model is loaded

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::Classifier;
use crate::config::Config;
use crate::error::ClassifyError;
use crate::models::{ClassificationResult, HealthResponse, PredictionsResponse};

/// Classifier backed by a remote HTTP service.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Client,
    /// Base URL without a trailing slash
    server_url: String,
}

impl HttpClassifier {
    /// Builds a client for `server_url`, applying `timeout` to both
    /// connecting and the whole request.
    pub fn new(server_url: impl Into<String>, timeout: Duration) -> Result<Self, ClassifyError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        let server_url = server_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, server_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClassifyError> {
        Self::new(config.server_url.clone(), config.request_timeout())
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, image: Vec<u8>) -> Result<ClassificationResult, ClassifyError> {
        let size = image.len();
        let response = self
            .client
            .post(self.endpoint("/classify"))
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Classification request rejected");
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: PredictionsResponse = serde_json::from_slice(&body)?;
        debug!(
            bytes = size,
            predictions = parsed.predictions.len(),
            "Classification response received"
        );

        Ok(ClassificationResult::from_predictions(parsed.predictions))
    }

    async fn check_health(&self) -> bool {
        let response = match self.client.get(self.endpoint("/health")).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Health check failed: {}", e);
                return false;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(status = response.status().as_u16(), "Health check rejected");
            return false;
        }

        match response.json::<HealthResponse>().await {
            Ok(health) => {
                if !health.model_loaded {
                    warn!(status = %health.status, "Backend has no model loaded");
                }
                health.model_loaded
            }
            Err(e) => {
                warn!("Invalid health response: {}", e);
                false
            }
        }
    }
}
