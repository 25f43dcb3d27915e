//! Response wrapper and error inspection

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use tracing::{error, warn};

use crate::error::{ApiError, ApiResult};
use crate::error_codes::{ErrorCodes, UNKNOWN_ERROR};

/// An `error_code` found in a response body, resolved through the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorError {
    /// Integer code, `None` when the field holds no usable number
    pub code: Option<i64>,
    /// The field as it appeared in the body
    pub raw_code: String,
    pub message: String,
}

impl VendorError {
    /// Resolve an `error_code` value; integers, integral floats and
    /// numeric strings are looked up, anything else is "Unknown Error"
    pub fn resolve(value: &Value, error_codes: &ErrorCodes) -> Self {
        let code = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        let raw_code = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let message = code
            .map(|code| error_codes.message(code))
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();

        Self {
            code,
            raw_code,
            message,
        }
    }
}

impl fmt::Display for VendorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.raw_code, self.message)
    }
}

/// Why a response is considered failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The body carried a vendor error code
    Vendor(VendorError),
    /// HTTP status >= 400 without a vendor code
    Status(StatusCode),
}

/// A fully read HTTP response
///
/// Returned for every call that got an answer from the server, including
/// 4xx/5xx answers. Use [`error`](Self::error) to classify it or
/// [`decode`](Self::decode) to treat failures as `Err`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: String,
    body: Bytes,
    vendor_error: Option<VendorError>,
}

impl ApiResponse {
    /// Read the body and run both error checks. Never fails.
    pub(crate) async fn read(response: reqwest::Response, error_codes: &ErrorCodes) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().to_string();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                error!(
                    target: "rdapi::response",
                    url = %url,
                    status = status.as_u16(),
                    error = %e,
                    "Failed to read response body"
                );
                Bytes::new()
            }
        };

        Self::from_parts(status, headers, url, body, error_codes)
    }

    pub(crate) fn from_parts(
        status: StatusCode,
        headers: HeaderMap,
        url: String,
        body: Bytes,
        error_codes: &ErrorCodes,
    ) -> Self {
        if is_error_status(status) {
            error!(
                target: "rdapi::client",
                url = %url,
                status = status.as_u16(),
                "HTTP error: {}", status
            );
        }

        let vendor_error = inspect_body(&body, error_codes);
        if let Some(vendor) = &vendor_error {
            error!(
                target: "rdapi::response",
                url = %url,
                code = %vendor.raw_code,
                "{}", vendor
            );
        }

        Self {
            status,
            headers,
            url,
            body,
            vendor_error,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the request
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// True when neither the status nor the body reports a failure
    pub fn is_success(&self) -> bool {
        self.error().is_none()
    }

    pub fn vendor_error(&self) -> Option<&VendorError> {
        self.vendor_error.as_ref()
    }

    /// Classify the response; a vendor code wins over the HTTP status
    pub fn error(&self) -> Option<ResponseError> {
        if let Some(vendor) = &self.vendor_error {
            return Some(ResponseError::Vendor(vendor.clone()));
        }
        if is_error_status(self.status) {
            return Some(ResponseError::Status(self.status));
        }
        None
    }

    /// Deserialize the body regardless of status
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn failed responses into `Err`, keep successful ones
    pub fn error_for_status(self) -> ApiResult<Self> {
        match self.error() {
            None => Ok(self),
            Some(ResponseError::Vendor(error)) => Err(ApiError::Vendor {
                status: self.status,
                error,
            }),
            Some(ResponseError::Status(status)) => Err(ApiError::Status {
                status,
                body: self.text().into_owned(),
            }),
        }
    }

    /// Deserialize a successful body, or fail with the response's error
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        self.error_for_status()?.json()
    }
}

/// Look for an `error_code` in a JSON object body
fn inspect_body(body: &[u8], error_codes: &ErrorCodes) -> Option<VendorError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(
                target: "rdapi::response",
                error = %e,
                "An error occurred while handling the response: body is not JSON"
            );
            return None;
        }
    };

    let code = value.get("error_code")?;
    Some(VendorError::resolve(code, error_codes))
}

fn is_error_status(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: u16, body: &'static str) -> ApiResponse {
        let codes = ErrorCodes::bundled().unwrap();
        ApiResponse::from_parts(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            "https://api.real-debrid.com/rest/1.0/test".to_string(),
            Bytes::from_static(body.as_bytes()),
            &codes,
        )
    }

    #[test]
    fn test_known_vendor_code() {
        let resp = response(401, r#"{"error": "bad_token", "error_code": 8}"#);
        let vendor = resp.vendor_error().unwrap();
        assert_eq!(vendor.code, Some(8));
        assert_eq!(vendor.message, "Bad token");
        assert_eq!(vendor.to_string(), "Error 8: Bad token");
        assert_eq!(resp.error(), Some(ResponseError::Vendor(vendor.clone())));
    }

    #[test]
    fn test_unknown_vendor_code() {
        let resp = response(200, r#"{"error": "???", "error_code": 4242}"#);
        assert_eq!(resp.vendor_error().unwrap().message, UNKNOWN_ERROR);
        assert!(!resp.is_success());
    }

    #[test]
    fn test_non_json_body_is_tolerated() {
        let resp = response(200, "<html>maintenance</html>");
        assert!(resp.vendor_error().is_none());
        assert!(resp.is_success());
        assert_eq!(resp.text(), "<html>maintenance</html>");
    }

    #[test]
    fn test_empty_body_is_tolerated() {
        let resp = response(204, "");
        assert!(resp.vendor_error().is_none());
        assert!(resp.error().is_none());
        assert!(resp.body().is_empty());
    }

    #[test]
    fn test_non_object_json_has_no_code() {
        let resp = response(200, "[1, 2, 3]");
        assert!(resp.vendor_error().is_none());
    }

    #[test]
    fn test_status_error_without_code() {
        let resp = response(503, "");
        assert_eq!(
            resp.error(),
            Some(ResponseError::Status(StatusCode::SERVICE_UNAVAILABLE))
        );
        let err = resp.error_for_status().unwrap_err();
        assert!(matches!(err, ApiError::Status { .. }));
    }

    #[test]
    fn test_decode_success_and_failure() {
        #[derive(Debug, Deserialize)]
        struct Count {
            nb: u32,
        }

        let count: Count = response(200, r#"{"nb": 3, "limit": 25}"#).decode().unwrap();
        assert_eq!(count.nb, 3);

        let err = response(403, r#"{"error": "permission_denied", "error_code": 9}"#)
            .decode::<Count>()
            .unwrap_err();
        assert_eq!(err.vendor_code(), Some(9));
    }

    #[test]
    fn test_numeric_string_code_is_resolved() {
        let resp = response(200, r#"{"error_code": "8"}"#);
        let vendor = resp.vendor_error().unwrap();
        assert_eq!(vendor.code, Some(8));
        assert_eq!(vendor.message, "Bad token");
    }

    #[test]
    fn test_integral_float_code_is_resolved() {
        let resp = response(200, r#"{"error_code": 8.0}"#);
        let vendor = resp.vendor_error().unwrap();
        assert_eq!(vendor.code, Some(8));
        assert_eq!(vendor.message, "Bad token");
    }

    #[test]
    fn test_unusable_code_is_unknown_error() {
        for body in [
            r#"{"error_code": null}"#,
            r#"{"error_code": "abc"}"#,
            r#"{"error_code": 8.5}"#,
            r#"{"error_code": 18446744073709551615}"#,
        ] {
            let resp = response(200, body);
            let vendor = resp.vendor_error().unwrap();
            assert_eq!(vendor.code, None, "{}", body);
            assert_eq!(vendor.message, UNKNOWN_ERROR);
            assert!(!resp.is_success());
        }
        assert_eq!(
            response(200, r#"{"error_code": null}"#).vendor_error().unwrap().raw_code,
            "null"
        );
    }

    #[test]
    fn test_redirect_status_is_not_an_error() {
        let resp = response(304, "");
        assert!(resp.error().is_none());
        assert!(resp.is_success());

        let resp = response(400, "");
        assert_eq!(resp.error(), Some(ResponseError::Status(StatusCode::BAD_REQUEST)));
    }
}
