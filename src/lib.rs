//! # paginated-fetch
//!
//! A Terraform "external" data source that collects every page of a
//! token-paginated REST API.
//!
//! Terraform writes a JSON object to stdin:
//!
//! ```json
//! {"api_url_base": "https://api.example.com/v1/items", "api_token": "...", "page_size": "50"}
//! ```
//!
//! and reads exactly one JSON object of string values back from stdout:
//!
//! ```json
//! {"combined_list": "[{\"id\": 1}, {\"id\": 2}]"}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paginated_fetch::config::{FetchConfig, InputOutcome};
//! use paginated_fetch::engine::{EngineConfig, FetchEngine};
//! use paginated_fetch::output::Envelope;
//!
//! #[tokio::main]
//! async fn main() -> paginated_fetch::Result<()> {
//!     let InputOutcome::Config(config) = FetchConfig::from_input(RAW)? else { return Ok(()) };
//!     if let Some(request) = config.validate()? {
//!         let engine = FetchEngine::for_request(&request, EngineConfig::default())?;
//!         let outcome = engine.run(&request).await?;
//!         println!("{}", Envelope::success(&outcome.items)?.to_line()?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! stdin ──► config ──► engine ─────────────► output ──► stdout
//!   FetchConfig        │  pagination (token)   Envelope
//!   PageSize           │  http + auth (bearer)
//!                      ▼
//!               upstream REST API
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Input parsing and validation
pub mod config;

/// Authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Pagination strategies
pub mod pagination;

/// The pagination loop
pub mod engine;

/// Output envelope and JSON layout
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
