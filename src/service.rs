//! Classification Service
//!
//! Get-or-classify flow over the shared result cache, plus a bounded worker
//! pool for classifying many images at once.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::cache::SharedCache;
use crate::classifier::Classifier;
use crate::config::Config;
use crate::error::{ClassifyError, Result};
use crate::models::ClassificationResult;

/// Outcome of a classification request.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Cache key the result is stored under
    pub key: String,
    pub result: ClassificationResult,
    /// True when no backend round-trip was made
    pub from_cache: bool,
}

/// Classifies images through a cache of previous results.
///
/// Only successful classifications are cached. Two workers missing on the
/// same key at the same time will both call the classifier; the later `put`
/// overwrites the earlier one.
pub struct ClassificationService<C> {
    cache: SharedCache<String, ClassificationResult>,
    classifier: Arc<C>,
    worker_count: usize,
}

impl<C> Clone for ClassificationService<C> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            classifier: Arc::clone(&self.classifier),
            worker_count: self.worker_count,
        }
    }
}

impl<C> ClassificationService<C>
where
    C: Classifier + 'static,
{
    /// Creates a service with a fresh cache of `cache_capacity` results.
    ///
    /// A `worker_count` of zero is treated as one.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` when `cache_capacity` is zero.
    pub fn new(classifier: C, cache_capacity: usize, worker_count: usize) -> Result<Self> {
        Ok(Self {
            cache: SharedCache::new(cache_capacity)?,
            classifier: Arc::new(classifier),
            worker_count: worker_count.max(1),
        })
    }

    pub fn from_config(classifier: C, config: &Config) -> Result<Self> {
        Self::new(classifier, config.cache_capacity, config.worker_count)
    }

    pub fn cache(&self) -> &SharedCache<String, ClassificationResult> {
        &self.cache
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Returns the cached result for `key`, or classifies `image` and caches
    /// the result.
    pub async fn classify_bytes(
        &self,
        key: impl Into<String>,
        image: Vec<u8>,
    ) -> std::result::Result<Classification, ClassifyError> {
        let key = key.into();
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }
        self.fetch_and_store(key, image).await
    }

    /// Classifies the image at `path`, keyed by its canonical absolute path.
    ///
    /// The file is only read on a cache miss.
    pub async fn classify_file(
        &self,
        path: impl AsRef<Path>,
    ) -> std::result::Result<Classification, ClassifyError> {
        let path = tokio::fs::canonicalize(path.as_ref()).await?;
        let key = path.to_string_lossy().into_owned();
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }

        let image = tokio::fs::read(&path).await?;
        self.fetch_and_store(key, image).await
    }

    /// Classifies every path with at most `worker_count` requests in flight.
    ///
    /// Results come back in the same order as `paths`.
    pub async fn classify_all<P>(
        &self,
        paths: impl IntoIterator<Item = P>,
    ) -> Vec<(PathBuf, std::result::Result<Classification, ClassifyError>)>
    where
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        let semaphore = Arc::new(Semaphore::new(self.worker_count));
        let mut workers = JoinSet::new();

        info!(
            images = paths.len(),
            workers = self.worker_count,
            "Classifying batch"
        );

        for (index, path) in paths.iter().cloned().enumerate() {
            let service = self.clone();
            let semaphore = Arc::clone(&semaphore);
            workers.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                (index, service.classify_file(&path).await)
            });
        }

        let mut outcomes: Vec<Option<std::result::Result<Classification, ClassifyError>>> =
            paths.iter().map(|_| None).collect();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((index, outcome)) => outcomes[index] = Some(outcome),
                Err(e) => warn!("Classification worker failed: {}", e),
            }
        }

        paths
            .into_iter()
            .zip(outcomes)
            .map(|(path, outcome)| {
                let outcome = outcome.unwrap_or_else(|| {
                    Err(ClassifyError::Join(format!(
                        "no result for {}",
                        path.display()
                    )))
                });
                (path, outcome)
            })
            .collect()
    }

    fn lookup(&self, key: &str) -> Option<Classification> {
        let result = self.cache.get(key)?;
        debug!(key, "Cache hit");
        Some(Classification {
            key: key.to_string(),
            result,
            from_cache: true,
        })
    }

    async fn fetch_and_store(
        &self,
        key: String,
        image: Vec<u8>,
    ) -> std::result::Result<Classification, ClassifyError> {
        debug!(key = %key, bytes = image.len(), "Cache miss, classifying");
        let result = self.classifier.classify(image).await?;

        if let Some((evicted, _)) = self.cache.put(key.clone(), result.clone()) {
            debug!(key = %evicted, "Evicted cached classification");
        }

        Ok(Classification {
            key,
            result,
            from_cache: false,
        })
    }
}
