//! Engine types
//!
//! Configuration and outcome types for the fetch engine.

use crate::config::{DEFAULT_MAX_PAGES, DEFAULT_REQUEST_TIMEOUT};
use serde_json::Value;
use std::time::Duration;

/// Configuration for a fetch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum pages to request before giving up on finding the end
    pub max_pages: u32,
    /// Timeout for each request
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl EngineConfig {
    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// What a completed run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    /// Records from every page, in order
    pub items: Vec<Value>,
    /// Number of pages requested
    pub pages_fetched: u32,
    /// The page cap stopped the run before the last page was seen
    pub reached_page_limit: bool,
}
