//! Transaction resource.
//!
//! A transaction is one charging session on a charger connector. They are
//! listed per site with `GET /sites/{uuid}/transactions`.
//!
//! Energy and cost amounts are decimal strings as sent by the API, so no
//! precision is lost in decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A charging session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub charger_id: u64,
    pub charger_connector_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<u64>,
    /// The RFID tag or token that authorized the session.
    pub id_tag: String,
    /// Meter reading (Wh) at session start.
    pub meter_start: i64,
    /// Meter reading (Wh) at session stop; absent while charging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meter_stop: Option<i64>,
    pub total_kwh: String,
    pub start_cost: String,
    pub kwh_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_kwh_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns `true` while the session has not been stopped.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.stopped_at.is_none()
    }

    /// Energy delivered in Wh, when the session has a stop reading.
    #[must_use]
    pub fn energy_wh(&self) -> Option<i64> {
        self.meter_stop.map(|stop| stop - self.meter_start)
    }
}

/// Legacy name for [`Transaction`].
pub type ChargeSession = Transaction;
