//! Pagination module
//!
//! Supports: page-token cursors (`nextPageToken` → `page_token`)
//!
//! # Overview
//!
//! A [`Paginator`] computes the query parameters of the first request,
//! extracts the records of each response and decides from the response body
//! whether another page should be fetched.

mod strategies;
mod types;

pub use strategies::TokenPaginator;
pub use types::{token_from_value, NextPage, PaginationState, Paginator, RecordsField};
