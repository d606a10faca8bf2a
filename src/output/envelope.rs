//! Output envelope

use super::json::to_python_json;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// The object printed on stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Records, JSON-encoded into a string
    Success {
        /// JSON array text
        combined_list: String,
    },
    /// Fatal error message
    Failure {
        /// Error message
        error: String,
    },
}

impl Envelope {
    /// Encode accumulated records
    pub fn success(items: &[Value]) -> Result<Self> {
        Ok(Self::Success {
            combined_list: to_python_json(items)?,
        })
    }

    /// The envelope for "nothing to fetch"
    pub fn empty() -> Self {
        Self::Success {
            combined_list: "[]".to_string(),
        }
    }

    /// Wrap a fatal error
    pub fn failure(error: &Error) -> Self {
        Self::Failure {
            error: error.to_string(),
        }
    }

    /// Check if this is a success envelope
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Render the single stdout line (without trailing newline)
    pub fn to_line(&self) -> Result<String> {
        to_python_json(self)
    }
}
