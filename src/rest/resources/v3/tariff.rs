//! Energy tariff resource.
//!
//! `GET /tariffs` takes the market location in a JSON request body
//! ([`TariffRequest`]) and answers with a `{ "data": [...] }` list.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// An energy price for a location and point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Tariff type (e.g. `"dynamic"`).
    #[serde(rename = "type")]
    pub tariff_type: String,
    /// Market location the price applies to.
    pub location: String,
    /// Start of the price interval.
    pub timestamp: String,
    /// Price per kWh.
    pub price: f64,
    /// Whether `price` includes VAT.
    pub price_includes_tax: bool,
}

/// Request body of the tariffs endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRequest {
    pub location: String,
}

impl TariffRequest {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Renders the request as the JSON body sent with `GET /tariffs`.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({ "location": self.location })
    }
}
