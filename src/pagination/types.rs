//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by all strategies.

use serde_json::Value;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these parameters
    Continue {
        /// Query parameters for the next request, in order
        query_params: Vec<(String, String)>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with query parameters
    pub fn with_params(params: Vec<(String, String)>) -> Self {
        Self::Continue {
            query_params: params,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// The records field of one response
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordsField<'a> {
    /// The field is an array
    Items(&'a [Value]),
    /// The field is absent
    Missing,
    /// The field is present but not an array
    NotArray(&'a Value),
}

impl RecordsField<'_> {
    /// Records to append (empty unless the field is an array)
    pub fn items(&self) -> &[Value] {
        match self {
            Self::Items(items) => items,
            Self::Missing | Self::NotArray(_) => &[],
        }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages processed so far
    pub page: u32,
    /// Token for the next request
    pub token: Option<String>,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Set token
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Clear the token once the last page has been seen
    pub fn clear_token(&mut self) {
        self.token = None;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the first request
    fn initial_params(&self, state: &PaginationState) -> Vec<(String, String)>;

    /// Locate the records in a response body
    fn extract_records<'a>(&self, body: &'a Value) -> RecordsField<'a>;

    /// Process a response and determine if there's a next page, returning
    /// the query parameters of the next request
    fn process_response(&self, body: &Value, state: &mut PaginationState) -> NextPage;
}

/// Interpret a token field
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` all mean "no more pages".
/// Strings are used verbatim; other truthy scalars are rendered as text.
pub fn token_from_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        other => Some(other.to_string()),
    }
}
