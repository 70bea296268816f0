//! Classifier Cache - command-line client
//!
//! Classifies the images given on the command line through the result cache
//! and prints their predictions.

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use classifier_cache::cli::Cli;
use classifier_cache::models::ClassificationStatus;
use classifier_cache::{Classifier, ClassificationService, Config, HttpClassifier};

/// Main entry point for the classifier client.
///
/// # Startup Sequence
/// 1. Parse command-line arguments
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables, then apply flags
/// 4. Probe the backend health endpoint
/// 5. Classify every image on the worker pool
/// 6. Print predictions and cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classifier_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(Config::from_env());
    info!(
        "Configuration loaded: cache_capacity={}, server_url={}, timeout={}ms, workers={}",
        config.cache_capacity, config.server_url, config.request_timeout_ms, config.worker_count
    );

    let classifier =
        HttpClassifier::from_config(&config).context("failed to build HTTP client")?;
    if classifier.check_health().await {
        info!("Connected to server at {}", config.server_url);
    } else {
        warn!(
            "Server not ready at {}. Please start the backend server.",
            config.server_url
        );
    }

    let service = ClassificationService::from_config(classifier, &config)
        .context("invalid cache configuration")?;

    info!("{}", ClassificationStatus::Processing.message());
    let paths = cli.images;
    let total = paths.len();
    let mut failures = 0usize;

    for (path, outcome) in service.classify_all(paths).await {
        match outcome {
            Ok(classification) => {
                let origin = if classification.from_cache {
                    " (from cache)"
                } else {
                    ""
                };
                println!("{}{}", path.display(), origin);
                for prediction in &classification.result.predictions {
                    println!("  {}", prediction);
                }
            }
            Err(e) => {
                failures += 1;
                error!(
                    path = %path.display(),
                    "{}: {}",
                    ClassificationStatus::Error.message(),
                    e
                );
            }
        }
    }

    let stats = service.cache().stats();
    info!(
        "Cache stats: hits={}, misses={}, evictions={}, entries={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
        stats.hit_rate()
    );
    println!("{}", serde_json::to_string_pretty(&stats)?);

    if failures > 0 {
        bail!("{} of {} images failed to classify", failures, total);
    }

    info!("{}", ClassificationStatus::Success.message());
    Ok(())
}
