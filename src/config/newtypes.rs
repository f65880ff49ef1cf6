//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Production endpoint of the VoltTime (Plugchoice) API.
pub const DEFAULT_BASE_URL: &str = "https://app.plugchoice.com/api/v3";

/// A validated VoltTime API key.
///
/// Only emptiness is checked here. Whether the key is actually accepted is
/// decided by the server on the first request.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use volttime_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL, such as `https://app.plugchoice.com/api/v3`.
///
/// Request paths are appended to this value verbatim, so a trailing slash
/// is removed on construction.
///
/// # Example
///
/// ```rust
/// use volttime_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/api/v3/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/api/v3");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL lacks an
    /// `http`/`https` scheme or a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let invalid = || ConfigError::InvalidBaseUrl { url: raw.clone() };

        let (scheme, rest) = trimmed.split_once("://").ok_or_else(invalid)?;
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let authority = rest.split('/').next().unwrap_or_default();
        let host_and_port = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        let host = host_and_port.split(':').next().unwrap_or_default();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let host_start = scheme.len() + "://".len() + (authority.len() - host_and_port.len());
        Ok(Self {
            url: trimmed.to_string(),
            host_start,
            host_end: host_start + host.len(),
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let scheme_len = "https://".len();
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            host_start: scheme_len,
            host_end: scheme_len + "app.plugchoice.com".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
