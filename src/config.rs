use std::path::PathBuf;

use tracing::{error, info};

/// Default Real-Debrid REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.real-debrid.com/rest/1.0";

/// Environment variable consulted by [`ClientConfig::from_env`]
pub const TOKEN_ENV_VAR: &str = "RD_APITOKEN";

/// Client configuration
///
/// Validation is deferred to [`Client::new`](crate::Client::new), so a
/// missing token only surfaces there as [`ApiError::Config`](crate::ApiError::Config).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token sent as `Authorization: Bearer <token>`
    pub token: Option<String>,
    /// Base URL every path is appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    /// User agent string
    pub user_agent: Option<String>,
    /// Replacement for the bundled error code table
    pub error_codes_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration with an explicit token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::empty()
        }
    }

    /// Read the token from `RD_APITOKEN`, loading `.env` first if present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            token: std::env::var(TOKEN_ENV_VAR).ok(),
            ..Self::empty()
        }
    }

    /// Whether a non-blank token is configured; logs the outcome
    pub fn has_token(&self) -> bool {
        let present = self
            .token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if present {
            info!(target: "rdapi::config", "API token is set");
        } else {
            error!(target: "rdapi::config", "API token is empty, please add a token");
        }
        present
    }

    fn empty() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: Some(format!("rdapi/{}", env!("CARGO_PKG_VERSION"))),
            error_codes_file: None,
        }
    }

    /// Point the client at another endpoint (proxies, mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Load the error code table from `path` instead of the bundled one
    pub fn with_error_codes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_codes_file = Some(path.into());
        self
    }
}
