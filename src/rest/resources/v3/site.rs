//! Site resource.
//!
//! A site is a physical location (home, office, depot) that groups chargers.
//! Sites are listed with `GET /sites` and fetched with `GET /sites/{uuid}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use volttime_api::rest::PaginationParams;
//!
//! let sites = client.get_sites(PaginationParams::new().page(1).per_page(10)).await?;
//! for site in sites.iter() {
//!     println!("{} ({}, {})", site.name, site.city, site.country);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A charging site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Public identifier, used in site paths.
    pub uuid: String,
    /// Numeric identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub house_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number_addition: Option<String>,
    pub city: String,
    /// ISO country code.
    pub country: String,
    /// Features enabled for the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<SiteCapabilities>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Features enabled for a site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCapabilities {
    /// Whether smart charging is available.
    #[serde(default)]
    pub smart_charging: Option<bool>,
    /// Load management options.
    #[serde(default)]
    pub load_management: Option<LoadManagement>,
}

/// Load management options of a site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadManagement {
    /// Dynamic load balancing across chargers.
    #[serde(default)]
    pub dynamic: Option<bool>,
    /// Peak shaving against the grid connection limit.
    #[serde(default)]
    pub peak_shaving: Option<bool>,
    /// Charging on solar surplus.
    #[serde(default)]
    pub solar: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_deserialization_with_capabilities() {
        let site: Site = serde_json::from_value(json!({
            "uuid": "abc",
            "id": 7,
            "name": "Head Office",
            "street": "Stationsplein",
            "postal_code": "1012 AB",
            "house_number": 12,
            "house_number_addition": "B",
            "city": "Amsterdam",
            "country": "NL",
            "capabilities": {
                "smart_charging": true,
                "load_management": {"dynamic": true, "solar": false}
            },
            "created_at": "2023-01-10T09:00:00.000000Z",
            "updated_at": "2023-06-10T09:00:00.000000Z"
        }))
        .unwrap();

        assert_eq!(site.house_number_addition.as_deref(), Some("B"));
        let capabilities = site.capabilities.unwrap();
        assert_eq!(capabilities.smart_charging, Some(true));
        let load = capabilities.load_management.unwrap();
        assert_eq!(load.dynamic, Some(true));
        assert_eq!(load.solar, Some(false));
        assert!(load.peak_shaving.is_none());
    }
}
