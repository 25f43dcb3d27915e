//! Vendor error code table
//!
//! Real-Debrid reports application failures as an integer `error_code` in
//! the JSON body. The table mapping those codes to messages ships with the
//! crate and is parsed once when a [`Client`](crate::Client) is built.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ApiError, ApiResult};

/// Message used for codes missing from the table
pub const UNKNOWN_ERROR: &str = "Unknown Error";

const BUNDLED: &str = include_str!("../resources/error_codes.json");

/// Immutable map from vendor error codes to messages
#[derive(Debug, Clone)]
pub struct ErrorCodes {
    codes: HashMap<i64, String>,
}

impl ErrorCodes {
    /// Parse the table shipped with the crate
    pub fn bundled() -> ApiResult<Self> {
        Self::from_json_str(BUNDLED)
    }

    /// Parse a table from JSON of the form `{"8": "Bad token", ...}`
    pub fn from_json_str(json: &str) -> ApiResult<Self> {
        let codes: HashMap<i64, String> = serde_json::from_str(json)
            .map_err(|e| ApiError::config(format!("Malformed error code table: {}", e)))?;
        Ok(Self { codes })
    }

    /// Load a table from a JSON file on disk
    pub fn from_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ApiError::config(format!(
                "Failed to read error code table {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Message for `code`, or [`UNKNOWN_ERROR`] when unmapped
    pub fn message(&self, code: i64) -> &str {
        self.codes
            .get(&code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ERROR)
    }

    pub fn contains(&self, code: i64) -> bool {
        self.codes.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
