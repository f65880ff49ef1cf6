//! Resource client for the VoltTime REST API.
//!
//! This module provides [`VoltTimeClient`], built on top of
//! [`HttpClient`](crate::clients::HttpClient), with one method per API
//! operation:
//!
//! - Users: `get_current_user`, `get_user_details`
//! - Sites: `get_sites`, `get_site`, `get_all_sites`
//! - Chargers: `get_chargers`, `get_charger`, `get_all_chargers`
//!   (and the legacy `get_charge_points`, `get_charge_point`)
//! - Transactions: `get_transactions_by_site`, `get_all_transactions_by_site`
//! - Catalog: `get_tariffs`, `get_providers`, `get_products`
//! - Connectors: `get_connector_power_usage`, `get_connector_latest_meter_value`
//!
//! # Example
//!
//! ```rust,ignore
//! use volttime_api::{ApiKey, VoltTimeClient, VoltTimeConfig};
//!
//! let config = VoltTimeConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = VoltTimeClient::new(&config)?;
//! let chargers = client.get_all_chargers(Default::default()).await?;
//! ```

mod client;

pub use client::VoltTimeClient;
