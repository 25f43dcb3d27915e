use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_LENGTH};
use reqwest::{Body, Method, RequestBuilder};
use tokio_util::io::ReaderStream;
use tracing::{debug, error};

use crate::api::{Downloads, Hosts, Settings, Streaming, System, Torrents, Traffic, Unrestrict, User};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::error_codes::ErrorCodes;
use crate::request::Params;
use crate::response::ApiResponse;

/// Real-Debrid API client
///
/// Cloning is cheap: clones share the connection pool and error table.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    error_codes: Arc<ErrorCodes>,
}

impl Client {
    /// Build a client, failing on a missing token or a bad error table
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        // Blank tokens are rejected, but the token is sent exactly as given
        if !config.has_token() {
            return Err(ApiError::config("API token is empty, please provide a valid token"));
        }
        let token = config.token.as_deref().unwrap_or_default();

        url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::config(format!("Invalid base URL {}: {}", config.base_url, e)))?;

        let error_codes = Arc::new(match &config.error_codes_file {
            Some(path) => ErrorCodes::from_file(path)?,
            None => ErrorCodes::bundled()?,
        });

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::config("API token contains invalid header characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(
            target: "rdapi::client",
            base_url = %config.base_url,
            error_codes = error_codes.len(),
            "Client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url,
            error_codes,
        })
    }

    /// Build a client from `RD_APITOKEN`
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Message for a vendor error code, "Unknown Error" when unmapped
    pub fn error_message(&self, code: i64) -> &str {
        self.error_codes.message(code)
    }

    pub fn error_codes(&self) -> &ErrorCodes {
        &self.error_codes
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request to `path`
    ///
    /// GET, HEAD and DELETE carry `params` in the query string; other
    /// methods send them as a form body. Failed HTTP statuses and vendor
    /// error codes are logged and still returned as `Ok`.
    pub async fn request(&self, method: Method, path: &str, params: Params) -> ApiResult<ApiResponse> {
        let builder = self.http.request(method.clone(), self.url(path));
        let pairs = params.pairs();
        let builder = if matches!(method, Method::GET | Method::HEAD | Method::DELETE) {
            builder.query(&pairs)
        } else {
            builder.form(&pairs)
        };
        self.send(method, path, builder).await
    }

    pub async fn get(&self, path: &str, params: Params) -> ApiResult<ApiResponse> {
        self.request(Method::GET, path, params).await
    }

    pub async fn post(&self, path: &str, params: Params) -> ApiResult<ApiResponse> {
        self.request(Method::POST, path, params).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.request(Method::DELETE, path, Params::new()).await
    }

    /// PUT the contents of a local file, with `params` in the query string
    ///
    /// The file is streamed rather than read into memory and is closed
    /// once the request finishes.
    pub async fn put_file(
        &self,
        path: &str,
        file: impl AsRef<Path>,
        params: Params,
    ) -> ApiResult<ApiResponse> {
        let file_path = file.as_ref();
        let file = tokio::fs::File::open(file_path).await.map_err(|e| {
            error!(
                target: "rdapi::client",
                file = %file_path.display(),
                error = %e,
                "Failed to open upload file"
            );
            ApiError::Io(e)
        })?;
        let size = file.metadata().await?.len();

        debug!(
            target: "rdapi::client",
            file = %file_path.display(),
            size,
            "Uploading file"
        );

        let body = Body::wrap_stream(ReaderStream::new(file));
        let builder = self
            .http
            .put(self.url(path))
            .query(&params.pairs())
            .header(CONTENT_LENGTH, size)
            .body(body);

        self.send(Method::PUT, path, builder).await
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> ApiResult<ApiResponse> {
        debug!(target: "rdapi::client", method = %method, path, "Sending request");

        let response = builder.send().await.map_err(|e| {
            error!(
                target: "rdapi::client",
                method = %method,
                path,
                error = %e,
                timeout = e.is_timeout(),
                connect = e.is_connect(),
                "Request failed"
            );
            ApiError::Request(e)
        })?;

        let response = ApiResponse::read(response, &self.error_codes).await;
        debug!(
            target: "rdapi::client",
            method = %method,
            path,
            status = response.status().as_u16(),
            "Received response"
        );
        Ok(response)
    }

    pub fn system(&self) -> System<'_> {
        System::new(self)
    }

    pub fn user(&self) -> User<'_> {
        User::new(self)
    }

    pub fn unrestrict(&self) -> Unrestrict<'_> {
        Unrestrict::new(self)
    }

    pub fn traffic(&self) -> Traffic<'_> {
        Traffic::new(self)
    }

    pub fn streaming(&self) -> Streaming<'_> {
        Streaming::new(self)
    }

    pub fn downloads(&self) -> Downloads<'_> {
        Downloads::new(self)
    }

    pub fn torrents(&self) -> Torrents<'_> {
        Torrents::new(self)
    }

    pub fn hosts(&self) -> Hosts<'_> {
        Hosts::new(self)
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings::new(self)
    }
}

/// Encode an identifier as a single path segment
pub(crate) fn segment(id: impl AsRef<str>) -> String {
    urlencoding::encode(id.as_ref()).into_owned()
}
