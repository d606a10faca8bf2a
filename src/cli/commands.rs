//! CLI arguments and parsing

use crate::config::{DEFAULT_MAX_PAGES, DEFAULT_REQUEST_TIMEOUT};
use crate::engine::EngineConfig;
use crate::error::{Error, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Collect every page of a token-paginated API for a Terraform external
/// data source
#[derive(Parser, Debug, Clone)]
#[command(name = "fetch-paginated-data")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read the query JSON from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Maximum number of pages to request
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            input: None,
            max_pages: DEFAULT_MAX_PAGES,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            verbose: false,
        }
    }
}

impl Cli {
    /// Engine settings derived from the flags
    pub fn engine_config(&self) -> Result<EngineConfig> {
        if self.max_pages == 0 {
            return Err(Error::config("--max-pages must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("--timeout-secs must be at least 1"));
        }

        Ok(EngineConfig::default()
            .with_max_pages(self.max_pages)
            .with_timeout(Duration::from_secs(self.timeout_secs)))
    }

    /// Log filter for the subscriber
    ///
    /// A valid `RUST_LOG` value wins; otherwise the level is INFO, or DEBUG
    /// with `--verbose`.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        if let Some(filter) = rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
        {
            return filter;
        }

        let level = if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        };
        EnvFilter::default().add_directive(level.into())
    }
}
