//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_CACHE_CAPACITY;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of classification results kept in the cache
    pub cache_capacity: usize,
    /// Base URL of the classification backend
    pub server_url: String,
    /// Connect and read timeout for backend requests, in milliseconds
    pub request_timeout_ms: u64,
    /// Number of images classified concurrently
    pub worker_count: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached results (default: 50)
    /// - `SERVER_URL` - Backend base URL (default: http://localhost:8080)
    /// - `REQUEST_TIMEOUT_MS` - Request timeout in ms (default: 10000)
    /// - `WORKER_COUNT` - Concurrent classifications (default: 4)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.cache_capacity),
            server_url: env::var("SERVER_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.server_url),
            request_timeout_ms: parse_var("REQUEST_TIMEOUT_MS")
                .unwrap_or(defaults.request_timeout_ms),
            worker_count: parse_var("WORKER_COUNT").unwrap_or(defaults.worker_count),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            server_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 10_000,
            worker_count: 4,
        }
    }
}
