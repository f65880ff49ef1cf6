//! HTTP request types for the VoltTime API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder. The API
//! surface used by this SDK is read-only, so every request is a GET.

use std::collections::BTreeMap;

/// A GET request to be sent to the VoltTime API.
///
/// Query parameters are kept in a sorted map so that identical logical
/// requests always produce identical URLs.
///
/// # Example
///
/// ```rust
/// use volttime_api::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::builder("/sites")
///     .query_param("page", "2")
///     .query_param("per_page", "50")
///     .build();
///
/// assert_eq!(request.path, "/sites");
///
/// let tariffs = HttpRequest::builder("/tariffs")
///     .body(json!({"location": "NL"}))
///     .build();
/// assert!(tariffs.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the base URL), starting with `/`.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<BTreeMap<String, String>>,
    /// A JSON body sent along with the GET request, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Option<BTreeMap<String, String>>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Self {
            path,
            query: None,
            body: None,
        }
    }

    /// Sets all query parameters at once.
    ///
    /// An empty map leaves the request without a query string.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}
