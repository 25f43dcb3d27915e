//! Error types for the Real-Debrid client

use reqwest::StatusCode;
use thiserror::Error;

use crate::response::VendorError;

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid or incomplete client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced a response (connection, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The API answered with an `error_code` in its body
    #[error("API error (HTTP {status}): {error}")]
    Vendor { status: StatusCode, error: VendorError },

    /// HTTP status >= 400 without a vendor error code
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ApiError::Config(message.into())
    }

    /// Vendor error code carried by this error, if any
    pub fn vendor_code(&self) -> Option<i64> {
        match self {
            ApiError::Vendor { error, .. } => error.code,
            _ => None,
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Vendor { status, .. } | ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(err) => err.status(),
            _ => None,
        }
    }

    /// Check if this error is due to a missing or invalid token
    pub fn is_auth_error(&self) -> bool {
        matches!(self.vendor_code(), Some(8 | 9))
            || matches!(self.status(), Some(StatusCode::UNAUTHORIZED))
    }
}
