//! HTTP client module
//!
//! Thin wrapper over reqwest that applies authentication, default headers and
//! a fixed timeout, and turns non-2xx statuses, transport failures and
//! undecodable bodies into [`crate::Error`]s.
//!
//! Requests are never retried: a single failure aborts the run.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
