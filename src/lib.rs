//! # VoltTime API Rust SDK
//!
//! A typed, async client for the VoltTime (Plugchoice) EV charging REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`VoltTimeConfig`] and [`VoltTimeConfigBuilder`]
//! - Bearer-token authenticated requests over a single reusable HTTP client
//! - One method per API operation on [`VoltTimeClient`], returning typed models
//! - A single error type, [`ApiError`], for transport, HTTP and decoding failures
//! - Client-side aggregation of paginated listings via [`rest::collect_all_pages`]
//!
//! ## Quick Start
//!
//! ```rust
//! use volttime_api::{ApiKey, VoltTimeClient, VoltTimeConfig};
//!
//! let config = VoltTimeConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = VoltTimeClient::new(&config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use volttime_api::VoltTimeClient;
//! use volttime_api::rest::{PaginationParams, TransactionParams};
//!
//! let client = VoltTimeClient::from_api_key("your-api-key")?;
//!
//! // Current user
//! let user = client.get_current_user().await?;
//!
//! // One page of sites
//! let sites = client.get_sites(PaginationParams::new().page(1).per_page(10)).await?;
//!
//! // Every transaction of the first site, 100 per request
//! if let Some(site) = sites.first() {
//!     let transactions = client.get_all_transactions_by_site(&site.uuid, None).await?;
//!     println!("{} transactions at {}", transactions.len(), site.name);
//! }
//!
//! // Live connector telemetry
//! let usage = client.get_connector_power_usage("charger-uuid", 1).await?;
//! println!("Drawing {} kW", usage.kw);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! match client.get_site("unknown").await {
//!     Ok(site) => println!("{}", site.name),
//!     Err(e) if e.is_not_found() => println!("No such site"),
//!     Err(e) if e.is_transport() => println!("Network error: {e}"),
//!     Err(e) => println!("API error {:?}: {}", e.status_code, e.response_data.unwrap_or_default()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Server-side validation**: Credentials are only checked for emptiness locally
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Read-only**: The SDK issues GET requests only and never retries

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{ApiKey, BaseUrl, VoltTimeConfig, VoltTimeConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiErrorKind, HttpClient, HttpRequest, HttpRequestBuilder, HttpResponse, Result,
    VoltTimeClient,
};

// Re-export the most used REST types
pub use rest::resources::{
    ChargePoint, ChargeSession, Charger, ConnectorMeterValue, ConnectorPowerUsage, Product,
    Provider, Site, Tariff, Transaction, User,
};
pub use rest::{PageMeta, PaginatedResponse, PaginationParams, TransactionParams};
