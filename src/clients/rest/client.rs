//! Resource client for the VoltTime API.
//!
//! This module provides [`VoltTimeClient`], which exposes one method per API
//! operation. Each method builds the request path from its identifiers,
//! passes optional arguments as query parameters and delegates to
//! [`HttpClient`], which performs all error mapping.

use crate::clients::{ApiError, HttpClient, HttpRequest};
use crate::config::VoltTimeConfig;
use crate::error::ConfigError;
use crate::rest::resources::{
    ChargePoint, Charger, ConnectorMeterValue, ConnectorPowerUsage, Product, Provider, Site,
    Tariff, TariffRequest, Transaction, User,
};
use crate::rest::{
    collect_all_pages, DataEnvelope, PaginatedResponse, PaginationParams, TransactionParams,
};

/// Client for the VoltTime (Plugchoice) REST API.
///
/// # Thread Safety
///
/// `VoltTimeClient` is `Send + Sync` and holds no per-call state, so one
/// instance can be shared across tasks and used for overlapping requests.
///
/// # Example
///
/// ```rust,ignore
/// use volttime_api::VoltTimeClient;
/// use volttime_api::rest::PaginationParams;
///
/// let client = VoltTimeClient::from_api_key("your-api-key")?;
///
/// let user = client.get_current_user().await?;
/// println!("Logged in as {} <{}>", user.name, user.email);
///
/// let sites = client.get_sites(PaginationParams::new().page(1).per_page(10)).await?;
/// for site in sites.iter() {
///     let transactions = client.get_all_transactions_by_site(&site.uuid, None).await?;
///     println!("{}: {} transactions", site.name, transactions.len());
/// }
/// ```
#[derive(Debug)]
pub struct VoltTimeClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify VoltTimeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VoltTimeClient>();
};

impl VoltTimeClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &VoltTimeConfig) -> Result<Self, ConfigError> {
        tracing::debug!(base_url = %config.base_url(), "Creating VoltTime client");
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Creates a client for the production endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if `api_key` is empty.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(&VoltTimeConfig::new(api_key)?)
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    // User endpoints

    /// Fetches the authenticated user (`GET /user`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        self.get("/user").await
    }

    /// Fetches a user by id (`GET /user/{user_id}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_user_details(&self, user_id: &str) -> Result<User, ApiError> {
        self.get(format!("/user/{}", segment(user_id))).await
    }

    // Site endpoints

    /// Lists one page of sites (`GET /sites`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_sites(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<Site>, ApiError> {
        let request = HttpRequest::builder("/sites")
            .query(params.to_query())
            .build();
        self.http_client.get_json(request).await
    }

    /// Fetches every site across all pages.
    ///
    /// Only `per_page` of `params` is used; pages are walked from 1.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by any page.
    pub async fn get_all_sites(&self, params: PaginationParams) -> Result<Vec<Site>, ApiError> {
        collect_all_pages(params.per_page, move |page| self.get_sites(page)).await
    }

    /// Fetches a site (`GET /sites/{site_uuid}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_site(&self, site_uuid: &str) -> Result<Site, ApiError> {
        self.get(format!("/sites/{}", segment(site_uuid))).await
    }

    // Charger endpoints

    /// Lists one page of chargers (`GET /chargers`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_chargers(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<Charger>, ApiError> {
        let request = HttpRequest::builder("/chargers")
            .query(params.to_query())
            .build();
        self.http_client.get_json(request).await
    }

    /// Fetches every charger across all pages.
    ///
    /// Only `per_page` of `params` is used; pages are walked from 1.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by any page.
    pub async fn get_all_chargers(
        &self,
        params: PaginationParams,
    ) -> Result<Vec<Charger>, ApiError> {
        collect_all_pages(params.per_page, move |page| self.get_chargers(page)).await
    }

    /// Fetches a charger (`GET /chargers/{charger_uuid}`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_charger(&self, charger_uuid: &str) -> Result<Charger, ApiError> {
        self.get(format!("/chargers/{}", segment(charger_uuid))).await
    }

    // Transaction endpoints

    /// Lists one page of a site's transactions
    /// (`GET /sites/{site_uuid}/transactions`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_transactions_by_site(
        &self,
        site_uuid: &str,
        params: TransactionParams,
    ) -> Result<PaginatedResponse<Transaction>, ApiError> {
        let request = HttpRequest::builder(format!("/sites/{}/transactions", segment(site_uuid)))
            .query(params.to_query())
            .build();
        self.http_client.get_json(request).await
    }

    /// Fetches every transaction of a site across all pages.
    ///
    /// Filters in `params` are sent with every page. Pages are requested one
    /// at a time with `per_page` from `params`, or 100.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by any page; no partial result
    /// is returned.
    pub async fn get_all_transactions_by_site(
        &self,
        site_uuid: &str,
        params: Option<TransactionParams>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let params = params.unwrap_or_default();
        collect_all_pages(params.pagination.per_page, move |page| {
            self.get_transactions_by_site(site_uuid, params.with_pagination(page))
        })
        .await
    }

    // Legacy aliases

    /// Legacy name for [`get_chargers`](Self::get_chargers).
    ///
    /// # Errors
    ///
    /// Same as [`get_chargers`](Self::get_chargers).
    #[deprecated(note = "use `get_chargers` instead")]
    pub async fn get_charge_points(
        &self,
        params: PaginationParams,
    ) -> Result<PaginatedResponse<ChargePoint>, ApiError> {
        self.get_chargers(params).await
    }

    /// Legacy name for [`get_charger`](Self::get_charger).
    ///
    /// # Errors
    ///
    /// Same as [`get_charger`](Self::get_charger).
    #[deprecated(note = "use `get_charger` instead")]
    pub async fn get_charge_point(&self, charge_point_id: &str) -> Result<ChargePoint, ApiError> {
        self.get_charger(charge_point_id).await
    }

    // Tariff, provider and product endpoints

    /// Fetches energy tariffs for a market location (`GET /tariffs`).
    ///
    /// The location is sent as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_tariffs(&self, location: &str) -> Result<Vec<Tariff>, ApiError> {
        let request = HttpRequest::builder("/tariffs")
            .body(TariffRequest::new(location).to_body())
            .build();
        let envelope: DataEnvelope<Tariff> = self.http_client.get_json(request).await?;
        Ok(envelope.into_inner())
    }

    /// Lists OCPP backends (`GET /providers`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_providers(&self) -> Result<Vec<Provider>, ApiError> {
        let envelope: DataEnvelope<Provider> = self.get("/providers").await?;
        Ok(envelope.into_inner())
    }

    /// Lists purchasable products (`GET /products`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let envelope: DataEnvelope<Product> = self.get("/products").await?;
        Ok(envelope.into_inner())
    }

    // Connector endpoints

    /// Fetches the current power draw of a connector.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_connector_power_usage(
        &self,
        charger_uuid: &str,
        connector_id: u32,
    ) -> Result<ConnectorPowerUsage, ApiError> {
        self.get(format!(
            "/chargers/{}/connectors/{connector_id}/power-usage",
            segment(charger_uuid)
        ))
        .await
    }

    /// Fetches the latest meter values of a connector.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn get_connector_latest_meter_value(
        &self,
        charger_uuid: &str,
        connector_id: u32,
    ) -> Result<ConnectorMeterValue, ApiError> {
        self.get(format!(
            "/chargers/{}/connectors/{connector_id}/latest-metervalue",
            segment(charger_uuid)
        ))
        .await
    }

    /// Internal helper for parameterless GETs.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: impl Into<String>,
    ) -> Result<T, ApiError> {
        self.http_client
            .get_json(HttpRequest::builder(path).build())
            .await
    }
}

/// Percent-encodes an identifier for use as a single path segment.
fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
