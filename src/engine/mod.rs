//! Execution engine module
//!
//! The sequential pagination loop.
//!
//! # Overview
//!
//! The engine module provides:
//! - `FetchEngine` - Requests pages one at a time and accumulates records
//! - `EngineConfig` - Page cap and request timeout
//! - `FetchOutcome` - Accumulated records and how the run ended
//!
//! Reaching the page cap is not an error: the run is logged as incomplete
//! and the partial results are returned.

mod types;

pub use types::{EngineConfig, FetchOutcome};

use crate::auth::AuthConfig;
use crate::config::ValidatedRequest;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{NextPage, PaginationState, Paginator, RecordsField, TokenPaginator};
use tracing::{error, info, warn};
use url::Url;

/// Fetch engine for collecting every page of an endpoint
#[derive(Debug)]
pub struct FetchEngine {
    /// HTTP client
    client: HttpClient,
    /// Engine configuration
    config: EngineConfig,
}

impl FetchEngine {
    /// Create a new fetch engine
    pub fn new(client: HttpClient, config: EngineConfig) -> Self {
        Self { client, config }
    }

    /// Create an engine authenticated with the request's bearer token
    pub fn for_request(request: &ValidatedRequest, config: EngineConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder().timeout(config.timeout).build();
        let client = HttpClient::with_auth(http_config, AuthConfig::bearer(&request.token))?;
        Ok(Self::new(client, config))
    }

    /// Fetch every page of a validated request
    pub async fn run(&self, request: &ValidatedRequest) -> Result<FetchOutcome> {
        info!(
            "Starting pagination for: {} with page_size: {}",
            request.url, request.page_size
        );
        let paginator = TokenPaginator::new(request.page_size);
        self.fetch_all(&request.url, &paginator).await
    }

    /// Fetch pages from `url` until the paginator reports the last page or
    /// the page cap is reached
    pub async fn fetch_all(&self, url: &Url, paginator: &dyn Paginator) -> Result<FetchOutcome> {
        let mut state = PaginationState::new();
        let mut items = Vec::new();
        let mut query_params = paginator.initial_params(&state);

        while state.page < self.config.max_pages {
            let page = state.page + 1;

            let mut req_config = RequestConfig::new();
            for (key, value) in query_params {
                req_config = req_config.query(key, value);
            }

            info!(
                "Fetching page {page} with URL: {}",
                url_with_query(url, &req_config.query)
            );

            let body = self.client.get_json(url, req_config).await?;
            if !body.is_object() {
                return Err(Error::unexpected(format!(
                    "page {page} response is not a JSON object"
                )));
            }

            let records = paginator.extract_records(&body);
            match records {
                RecordsField::Items(list) => {
                    items.extend_from_slice(list);
                    info!("Page {page}: Found {} items.", list.len());
                }
                RecordsField::Missing => {
                    info!("Page {page}: records field is missing. Response: {body}");
                }
                RecordsField::NotArray(value) => {
                    warn!("Page {page}: records field is not a list ({value}). Skipping page.");
                }
            }

            match paginator.process_response(&body, &mut state) {
                NextPage::Continue { query_params: next } => query_params = next,
                NextPage::Done => {
                    info!("Page {page}: No nextPageToken found. Ending pagination.");
                    return Ok(FetchOutcome {
                        items,
                        pages_fetched: state.page,
                        reached_page_limit: false,
                    });
                }
            }
        }

        error!(
            "Reached maximum page limit ({}) before finding the end of results for {url}.",
            self.config.max_pages
        );
        Ok(FetchOutcome {
            items,
            pages_fetched: state.page,
            reached_page_limit: true,
        })
    }
}

/// Render the request URL for logs
fn url_with_query(url: &Url, query: &[(String, String)]) -> Url {
    let mut full = url.clone();
    if !query.is_empty() {
        full.query_pairs_mut().extend_pairs(query);
    }
    full
}
