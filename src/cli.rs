//! Command-line interface
//!
//! Arguments for the `classifier_cache` binary. Flags override values loaded
//! from the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Classify images through a bounded cache of previous results.
#[derive(Parser, Debug)]
#[command(name = "classifier_cache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Images to classify
    #[arg(required = true, value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Maximum number of cached results (overrides CACHE_CAPACITY)
    #[arg(long)]
    pub cache_capacity: Option<usize>,

    /// Backend base URL (overrides SERVER_URL)
    #[arg(long)]
    pub server_url: Option<String>,

    /// Request timeout in milliseconds (overrides REQUEST_TIMEOUT_MS)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Concurrent classifications (overrides WORKER_COUNT)
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(capacity) = self.cache_capacity {
            config.cache_capacity = capacity;
        }
        if let Some(url) = &self.server_url {
            config.server_url = url.clone();
        }
        if let Some(timeout) = self.timeout_ms {
            config.request_timeout_ms = timeout;
        }
        if let Some(workers) = self.workers {
            config.worker_count = workers;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_help_flag_is_not_an_image() {
        let err = Cli::try_parse_from(["classifier_cache", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_images_required() {
        let err = Cli::try_parse_from(["classifier_cache"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["classifier_cache", "--bogus", "a.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_positional_images() {
        let cli = Cli::try_parse_from(["classifier_cache", "a.png", "b.jpg"]).unwrap();
        assert_eq!(
            cli.images,
            vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]
        );
        assert!(cli.cache_capacity.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "classifier_cache",
            "--cache-capacity",
            "7",
            "--server-url",
            "http://backend:9000",
            "--timeout-ms",
            "250",
            "-w",
            "2",
            "a.png",
        ])
        .unwrap();

        let config = cli.apply(Config::default());
        assert_eq!(config.cache_capacity, 7);
        assert_eq!(config.server_url, "http://backend:9000");
        assert_eq!(config.request_timeout_ms, 250);
        assert_eq!(config.worker_count, 2);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["classifier_cache", "a.png"]).unwrap();
        let config = cli.apply(Config::default());
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.server_url, "http://localhost:8080");
    }
}
