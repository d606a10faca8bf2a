//! Error types for paginated-fetch
//!
//! Every variant is fatal: the run stops and the `Display` text becomes the
//! `{"error": ...}` message printed for Terraform. Soft conditions (page cap
//! reached, a page without a usable `list`) are logged by the engine and never
//! surface as an `Error`.

use thiserror::Error;

/// The main error type for paginated-fetch
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode JSON input: {source}")]
    InputJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Missing required input field: '{field}'")]
    MissingField { field: String },

    #[error("URL Error: invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP Error {status}: {reason}{}", body_suffix(.body))]
    HttpStatus {
        status: u16,
        reason: String,
        body: Option<String>,
    },

    #[error("URL Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("URL Error: timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Failed to decode JSON response: {source}")]
    ResponseJson {
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("An unexpected error occurred: {message}")]
    Unexpected { message: String },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(". Body: {body}"),
        None => String::new(),
    }
}

impl Error {
    /// Create an input JSON error
    pub fn input_json(source: serde_json::Error) -> Self {
        Self::InputJson { source }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, reason: impl Into<String>, body: Option<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
            body,
        }
    }

    /// Create a response decode error
    pub fn response_json(source: serde_json::Error) -> Self {
        Self::ResponseJson { source }
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Short machine-friendly name of the failure class, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::InputJson { .. } | Error::InvalidInput { .. } => "input",
            Error::MissingField { .. } | Error::Config { .. } => "validation",
            Error::InvalidUrl { .. } | Error::Transport(_) | Error::Timeout { .. } => "network",
            Error::HttpStatus { .. } => "http_status",
            Error::ResponseJson { .. } => "response_decode",
            Error::Encode(_) | Error::Unexpected { .. } => "unexpected",
        }
    }

    /// HTTP status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for paginated-fetch
pub type Result<T> = std::result::Result<T, Error>;
