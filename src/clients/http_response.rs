//! HTTP response type for the VoltTime API SDK.
//!
//! This module provides the [`HttpResponse`] type holding the status,
//! headers and decoded JSON body of an API response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::ApiError;

/// A response received from the VoltTime API.
///
/// The body is always a JSON value: empty bodies decode as `{}` and bodies
/// that are not JSON are wrapped as `{"raw_body": "<text>"}`.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use volttime_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!({"data": []}));
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Parses a raw body text into a JSON value.
    #[must_use]
    pub fn parse_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] of kind [`Decode`](crate::ApiErrorKind::Decode)
    /// carrying the status and raw body if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| ApiError::decode(self.code, self.body, &e))
    }
}
