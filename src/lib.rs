//! Classifier Cache - image classification client with a bounded result cache
//!
//! Submits images to a remote classification service and keeps recent results
//! in a fixed-capacity FIFO cache to avoid repeated round-trips.

pub mod cache;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use cache::{BoundedCache, SharedCache};
pub use classifier::{Classifier, HttpClassifier};
pub use config::Config;
pub use error::{CacheError, ClassifyError};
pub use service::{Classification, ClassificationService};
