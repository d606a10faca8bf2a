//! Output module
//!
//! Builds the single line Terraform reads from stdout.
//!
//! # Overview
//!
//! This module provides:
//! - `Envelope` - `{"combined_list": "..."}` or `{"error": "..."}`
//! - `to_python_json` - JSON text laid out the way Python's `json.dumps`
//!   lays it out, so output stays byte-compatible for existing consumers
//!
//! Terraform's external data source requires every output value to be a
//! string, so the accumulated records are encoded once into a JSON array
//! string and then again as the value of `combined_list`.

mod envelope;
mod json;

pub use envelope::Envelope;
pub use json::{to_python_json, PythonFormatter};
