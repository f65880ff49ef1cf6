//! HTTP client for VoltTime API communication.
//!
//! This module provides the [`HttpClient`] type, the single place where
//! requests are authenticated and failures are normalized into
//! [`ApiError`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::ApiError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::VoltTimeConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the VoltTime API.
///
/// The client handles:
/// - URL construction as `{base_url}{path}`
/// - Default headers (`Authorization: Bearer`, `Content-Type`, `Accept`, `User-Agent`)
/// - The per-request timeout
/// - Mapping of every failure into [`ApiError`]
///
/// No state changes after construction, so one client can serve any number
/// of concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// use volttime_api::VoltTimeConfig;
/// use volttime_api::clients::{HttpClient, HttpRequest};
///
/// let config = VoltTimeConfig::new("your-api-key")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder("/user").build();
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://app.plugchoice.com/api/v3`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &VoltTimeConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}VoltTime API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the VoltTime API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - no response is received (status absent)
    /// - a non-2xx response is received (status and body attached)
    /// - the body cannot be read after the status arrived (status attached)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(path = %request.path, query = ?request.query, "Sending VoltTime API request");

        let res = req_builder.send().await.map_err(|e| {
            tracing::debug!(path = %request.path, error = %e, "VoltTime API request failed before a response");
            ApiError::from(e)
        })?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res
            .text()
            .await
            .map_err(|e| ApiError::unreadable_body(code, e))?;
        let response = HttpResponse::new(code, res_headers, HttpResponse::parse_body(&body_text));

        tracing::debug!(path = %request.path, status = code, "Received VoltTime API response");

        if response.is_ok() {
            return Ok(response);
        }

        let error = ApiError::from_response(code, response.body);
        tracing::debug!(
            path = %request.path,
            status = code,
            message = %error.message,
            "VoltTime API rejected request"
        );
        Err(error)
    }

    /// Sends a GET request and decodes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport and HTTP failures, and an error of
    /// kind [`Decode`](crate::ApiErrorKind::Decode) if the body does not
    /// match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        self.request(request).await?.json()
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl};

    fn create_test_config() -> VoltTimeConfig {
        VoltTimeConfig::new("test-api-key").unwrap()
    }

    #[test]
    fn test_client_uses_default_base_url() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url(), "https://app.plugchoice.com/api/v3");
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let config = VoltTimeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:8080/api/v3/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080/api/v3");
    }

    #[test]
    fn test_bearer_authorization_header() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-api-key".to_string())
        );
    }

    #[test]
    fn test_json_content_headers() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = VoltTimeConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("FleetDashboard/2.1")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("FleetDashboard/2.1 | "));
        assert!(user_agent.contains("VoltTime API Library v"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
