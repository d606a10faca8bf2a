//! Pagination strategy implementations

use super::types::{token_from_value, NextPage, PaginationState, Paginator, RecordsField};
use crate::config::PageSize;
use serde_json::Value;

// ============================================================================
// Token Pagination
// ============================================================================

/// Page-token pagination
///
/// Every request carries the page size; each response may carry an opaque
/// token that is echoed back on the next request.
/// Common patterns:
/// - `?page_size=100&page_token=abc` with `{"list": [...], "nextPageToken": "def"}`
#[derive(Debug, Clone)]
pub struct TokenPaginator {
    /// Query parameter name for page size
    pub page_size_param: String,
    /// Page size value
    pub page_size: PageSize,
    /// Query parameter name for the token
    pub token_param: String,
    /// Response field holding the next token
    pub token_field: String,
    /// Response field holding the records
    pub records_field: String,
}

impl TokenPaginator {
    /// Create a paginator with the `page_size` / `page_token` /
    /// `nextPageToken` / `list` naming
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size_param: "page_size".to_string(),
            page_size,
            token_param: "page_token".to_string(),
            token_field: "nextPageToken".to_string(),
            records_field: "list".to_string(),
        }
    }

    fn params(&self, token: Option<&str>) -> Vec<(String, String)> {
        let mut params = vec![(self.page_size_param.clone(), self.page_size.to_string())];
        if let Some(token) = token {
            params.push((self.token_param.clone(), token.to_string()));
        }
        params
    }
}

impl Paginator for TokenPaginator {
    fn initial_params(&self, state: &PaginationState) -> Vec<(String, String)> {
        self.params(state.token.as_deref())
    }

    fn extract_records<'a>(&self, body: &'a Value) -> RecordsField<'a> {
        match body.get(&self.records_field) {
            None => RecordsField::Missing,
            Some(Value::Array(items)) => RecordsField::Items(items),
            Some(other) => RecordsField::NotArray(other),
        }
    }

    fn process_response(&self, body: &Value, state: &mut PaginationState) -> NextPage {
        state.next_page();

        match token_from_value(body.get(&self.token_field)) {
            Some(token) => {
                let params = self.params(Some(&token));
                state.set_token(token);
                NextPage::with_params(params)
            }
            None => {
                state.clear_token();
                NextPage::Done
            }
        }
    }
}
