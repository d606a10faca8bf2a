//! Input configuration
//!
//! Terraform hands the program a flat JSON object on stdin. This module turns
//! that object into a [`FetchConfig`] and then into a [`ValidatedRequest`]
//! the engine can run, applying the tolerant defaults for `page_size`.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

// ============================================================================
// Constants
// ============================================================================

/// Page size used when none (or an unusable one) is supplied
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: u32 = 10;

/// Largest accepted page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Upper bound on the number of pages fetched in one run
pub const DEFAULT_MAX_PAGES: u32 = 20;

/// Timeout applied to every HTTP request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Page Size
// ============================================================================

/// A page size known to lie within `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

/// Why a supplied page size was replaced by the default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSizeRejection {
    /// Parsed as an integer but outside the accepted range
    OutOfRange(i64),
    /// Not an integer at all
    Invalid(String),
}

impl PageSize {
    /// Create a page size, or `None` when out of range
    pub fn new(value: u32) -> Option<Self> {
        (MIN_PAGE_SIZE..=MAX_PAGE_SIZE)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Get the numeric value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse a raw `page_size` input value
    ///
    /// Accepts integer strings (surrounding whitespace allowed) and JSON
    /// numbers. Fractional numbers are truncated toward zero; decimal
    /// strings are rejected.
    pub fn parse(raw: &Value) -> std::result::Result<Self, PageSizeRejection> {
        let parsed = match raw {
            Value::String(s) => s.trim().parse::<i64>().ok(),
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            }),
            _ => None,
        };

        let Some(value) = parsed else {
            let shown = match raw {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(PageSizeRejection::Invalid(shown));
        };

        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(PageSizeRejection::OutOfRange(value))
    }

    /// Resolve the optional input value, falling back to the default with a
    /// warning instead of failing
    pub fn resolve(raw: Option<&Value>) -> Self {
        let raw = match raw {
            None | Some(Value::Null) => return Self::default(),
            Some(raw) => raw,
        };

        match Self::parse(raw) {
            Ok(size) => size,
            Err(PageSizeRejection::OutOfRange(value)) => {
                warn!(
                    "Page size {value} outside {MIN_PAGE_SIZE}-{MAX_PAGE_SIZE} range. Using default {DEFAULT_PAGE_SIZE}."
                );
                Self::default()
            }
            Err(PageSizeRejection::Invalid(shown)) => {
                warn!("Invalid page size '{shown}'. Using default {DEFAULT_PAGE_SIZE}.");
                Self::default()
            }
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Fetch Config
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct RawInput {
    #[serde(default)]
    api_url_base: Option<String>,
    #[serde(default)]
    api_token: Option<String>,
    #[serde(default)]
    page_size: Option<Value>,
}

/// Request configuration as received on stdin
#[derive(Clone, Default)]
pub struct FetchConfig {
    /// Endpoint to paginate; empty means "nothing to fetch"
    pub api_url_base: Option<String>,
    /// Static bearer token
    pub api_token: Option<String>,
    /// Raw page size, validated by [`FetchConfig::validate`]
    pub page_size: Option<Value>,
}

/// Result of reading stdin
#[derive(Debug)]
pub enum InputOutcome {
    /// Nothing was piped in
    Empty,
    /// A parsed configuration
    Config(FetchConfig),
}

/// A configuration that passed validation and is ready to paginate
#[derive(Clone)]
pub struct ValidatedRequest {
    /// Endpoint URL
    pub url: Url,
    /// Bearer token
    pub token: String,
    /// Effective page size
    pub page_size: PageSize,
}

impl FetchConfig {
    /// Parse the raw stdin contents
    pub fn from_input(raw: &str) -> Result<InputOutcome> {
        if raw.trim().is_empty() {
            return Ok(InputOutcome::Empty);
        }

        let value: Value = serde_json::from_str(raw).map_err(Error::input_json)?;
        if !value.is_object() {
            return Err(Error::invalid_input(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        }

        let input: RawInput =
            serde_json::from_value(value).map_err(|e| Error::invalid_input(e.to_string()))?;

        Ok(InputOutcome::Config(Self {
            api_url_base: input.api_url_base,
            api_token: input.api_token,
            page_size: input.page_size,
        }))
    }

    /// Validate the configuration
    ///
    /// Returns `Ok(None)` when `api_url_base` is empty: the upstream value is
    /// optional and an empty result is the correct answer.
    pub fn validate(&self) -> Result<Option<ValidatedRequest>> {
        let Some(base) = non_empty(self.api_url_base.as_deref()) else {
            info!("Received empty 'api_url_base'. Returning empty list.");
            return Ok(None);
        };

        let token = non_empty(self.api_token.as_deref())
            .ok_or_else(|| Error::missing_field("api_token"))?;

        let url = Url::parse(base).map_err(|source| Error::InvalidUrl {
            url: base.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_input(format!(
                "unsupported URL scheme '{}' in 'api_url_base'",
                url.scheme()
            )));
        }

        Ok(Some(ValidatedRequest {
            url,
            token: token.to_string(),
            page_size: PageSize::resolve(self.page_size.as_ref()),
        }))
    }
}

impl fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchConfig")
            .field("api_url_base", &self.api_url_base)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl fmt::Debug for ValidatedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedRequest")
            .field("url", &self.url.as_str())
            .field("token", &"<redacted>")
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn parse(raw: &str) -> FetchConfig {
        match FetchConfig::from_input(raw).unwrap() {
            InputOutcome::Config(config) => config,
            InputOutcome::Empty => panic!("Expected Config"),
        }
    }

    #[test_case(json!("10"), 10 ; "lower bound")]
    #[test_case(json!("100"), 100 ; "upper bound")]
    #[test_case(json!("50"), 50 ; "in range")]
    #[test_case(json!(" 25 "), 25 ; "whitespace")]
    #[test_case(json!(42), 42 ; "json integer")]
    #[test_case(json!(50.0), 50 ; "json float")]
    #[test_case(json!(50.7), 50 ; "json float truncated")]
    #[test_case(json!(9.99), 100 ; "json float below range")]
    #[test_case(json!("050"), 50 ; "leading zero")]
    #[test_case(json!("5"), 100 ; "below range")]
    #[test_case(json!("101"), 100 ; "above range")]
    #[test_case(json!("-20"), 100 ; "negative")]
    #[test_case(json!("abc"), 100 ; "not a number")]
    #[test_case(json!("50.0"), 100 ; "decimal string")]
    #[test_case(json!(true), 100 ; "boolean")]
    #[test_case(json!(null), 100 ; "null")]
    fn test_page_size_resolve(raw: Value, expected: u32) {
        assert_eq!(PageSize::resolve(Some(&raw)).get(), expected);
    }

    #[test]
    fn test_page_size_parse_rejections() {
        assert_eq!(
            PageSize::parse(&json!("5")),
            Err(PageSizeRejection::OutOfRange(5))
        );
        assert_eq!(
            PageSize::parse(&json!("ten")),
            Err(PageSizeRejection::Invalid("ten".to_string()))
        );
        assert_eq!(
            PageSize::parse(&json!([1])),
            Err(PageSizeRejection::Invalid("[1]".to_string()))
        );
    }

    #[test]
    fn test_page_size_default_and_display() {
        assert_eq!(PageSize::resolve(None), PageSize::default());
        assert_eq!(PageSize::default().to_string(), "100");
        assert!(PageSize::new(9).is_none());
        assert!(PageSize::new(101).is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            FetchConfig::from_input("").unwrap(),
            InputOutcome::Empty
        ));
        assert!(matches!(
            FetchConfig::from_input("  \n").unwrap(),
            InputOutcome::Empty
        ));
    }

    #[test]
    fn test_malformed_input() {
        let err = FetchConfig::from_input("{not json").unwrap_err();
        assert!(matches!(err, Error::InputJson { .. }));
        assert!(err.to_string().starts_with("Failed to decode JSON input: "));
    }

    #[test]
    fn test_non_object_input() {
        let err = FetchConfig::from_input("[1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: expected a JSON object, got an array"
        );

        let err = FetchConfig::from_input(r#"{"api_url_base": 7}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_absent_url_is_benign() {
        let config = parse(r#"{"api_token": "secret"}"#);
        assert!(config.validate().unwrap().is_none());

        let config = parse(r#"{"api_url_base": "", "page_size": "bogus"}"#);
        assert!(config.validate().unwrap().is_none());

        let config = parse(r#"{"api_url_base": null}"#);
        assert!(config.validate().unwrap().is_none());
    }

    #[test]
    fn test_missing_token() {
        let config = parse(r#"{"api_url_base": "https://api.example.com/items"}"#);
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required input field: 'api_token'");

        let config =
            parse(r#"{"api_url_base": "https://api.example.com/items", "api_token": ""}"#);
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::MissingField { .. }
        ));
    }

    #[test]
    fn test_invalid_url() {
        let config = parse(r#"{"api_url_base": "not a url", "api_token": "t"}"#);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(err.to_string().starts_with("URL Error: "));

        let config = parse(r#"{"api_url_base": "ftp://example.com/x", "api_token": "t"}"#);
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_valid_request() {
        let config = parse(
            r#"{"api_url_base": "https://api.example.com/items", "api_token": "secret", "page_size": "5"}"#,
        );
        let request = config.validate().unwrap().unwrap();
        assert_eq!(request.url.as_str(), "https://api.example.com/items");
        assert_eq!(request.token, "secret");
        assert_eq!(request.page_size.get(), 100);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = parse(r#"{"api_url_base": "https://x.test", "api_token": "secret"}"#);
        let shown = format!("{config:?}");
        assert!(!shown.contains("secret"));
        assert!(shown.contains("<redacted>"));

        let request = config.validate().unwrap().unwrap();
        assert!(!format!("{request:?}").contains("secret"));
    }
}
