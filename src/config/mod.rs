//! Configuration types for the VoltTime API SDK.
//!
//! This module provides the configuration types used to initialize the
//! client. Configuration is instance-based and passed explicitly; nothing is
//! read from the environment.
//!
//! # Overview
//!
//! - [`VoltTimeConfig`]: The configuration struct holding all SDK settings
//! - [`VoltTimeConfigBuilder`]: A builder for constructing [`VoltTimeConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use volttime_api::{ApiKey, VoltTimeConfig};
//!
//! let config = VoltTimeConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://app.plugchoice.com/api/v3");
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{ApiKey, BaseUrl, DEFAULT_BASE_URL};

use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the VoltTime API SDK.
///
/// Holds the API credential and the endpoint to talk to. The value is
/// immutable once built and cheap to clone.
///
/// # Thread Safety
///
/// `VoltTimeConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use volttime_api::{ApiKey, BaseUrl, VoltTimeConfig};
///
/// let config = VoltTimeConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .base_url(BaseUrl::new("https://staging.example.com/api/v3").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(10));
/// ```
#[derive(Clone, Debug)]
pub struct VoltTimeConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl VoltTimeConfig {
    /// Creates a configuration with the given key and all defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().api_key(ApiKey::new(api_key)?).build()
    }

    /// Creates a new builder for constructing a `VoltTimeConfig`.
    #[must_use]
    pub fn builder() -> VoltTimeConfigBuilder {
        VoltTimeConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify VoltTimeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VoltTimeConfig>();
};

/// Builder for constructing [`VoltTimeConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct VoltTimeConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl VoltTimeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    ///
    /// The prefix is followed by ` | ` and the SDK identifier.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`VoltTimeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<VoltTimeConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(VoltTimeConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
