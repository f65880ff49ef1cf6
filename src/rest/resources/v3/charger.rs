//! Charger resource.
//!
//! Chargers were called "charge points" in earlier versions of the API; the
//! [`ChargePoint`] alias keeps that name available.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An OCPP charging station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charger {
    /// Public identifier, used in charger paths.
    pub uuid: String,
    /// Numeric identifier.
    pub id: u64,
    /// OCPP charge box identity.
    pub identity: String,
    /// Free-form reference set by the owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Websocket connection state (e.g. `"connected"`).
    pub connection_status: String,
    /// Last OCPP status notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_error_code: Option<String>,
    /// Whether the installation wizard has been completed.
    pub setup_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Licenses attached to the charger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<ChargerLicenses>,
}

/// Licenses attached to a charger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargerLicenses {
    #[serde(default)]
    pub smart: Option<bool>,
    #[serde(default)]
    pub pro: Option<bool>,
}

/// Legacy name for [`Charger`].
pub type ChargePoint = Charger;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charger_minimal_fields() {
        let charger: Charger = serde_json::from_value(json!({
            "uuid": "c-1",
            "id": 3,
            "identity": "EVB-P2047238",
            "connection_status": "connected",
            "setup_completed": true,
            "created_at": "2023-03-01T12:00:00Z",
            "updated_at": "2023-03-02T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(charger.identity, "EVB-P2047238");
        assert!(charger.setup_completed);
        assert!(charger.status.is_none());
        assert!(charger.licenses.is_none());
    }

    #[test]
    fn test_charger_with_licenses_and_error() {
        let charger: ChargePoint = serde_json::from_value(json!({
            "uuid": "c-2",
            "id": 4,
            "identity": "ABB-TAC-001",
            "connection_status": "disconnected",
            "status": "Faulted",
            "error": "GroundFailure",
            "setup_completed": false,
            "created_at": "2023-03-01T12:00:00Z",
            "updated_at": "2023-03-02T12:00:00Z",
            "licenses": {"smart": true}
        }))
        .unwrap();

        assert_eq!(charger.status.as_deref(), Some("Faulted"));
        assert_eq!(charger.error.as_deref(), Some("GroundFailure"));
        assert_eq!(charger.licenses.unwrap().smart, Some(true));
    }
}
