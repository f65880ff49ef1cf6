//! Connector telemetry resources.
//!
//! - [`ConnectorPowerUsage`]: `GET /chargers/{uuid}/connectors/{id}/power-usage`
//! - [`ConnectorMeterValue`]: `GET /chargers/{uuid}/connectors/{id}/latest-metervalue`
//!
//! Meter values follow the OCPP 1.6 `MeterValues.req` layout, hence the
//! camelCase field names on the wire.

use serde::{Deserialize, Serialize};

/// Instantaneous power draw of a connector, per phase.
///
/// Values are decimal strings as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorPowerUsage {
    pub timestamp: String,
    /// Current on phase L1.
    #[serde(rename = "L1")]
    pub l1: String,
    /// Current on phase L2.
    #[serde(rename = "L2")]
    pub l2: String,
    /// Current on phase L3.
    #[serde(rename = "L3")]
    pub l3: String,
    /// Total active power in kW.
    #[serde(rename = "kW")]
    pub kw: String,
}

/// The most recent meter values reported for a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorMeterValue {
    pub connector_id: u32,
    pub meter_value: Vec<MeterValue>,
}

/// A set of sampled values taken at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterValue {
    pub timestamp: String,
    pub sampled_value: Vec<SampledValue>,
}

/// A single OCPP sampled value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampledValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Defaults to `Energy.Active.Import.Register` in OCPP when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ConnectorMeterValue {
    /// Finds the first sampled value with the given measurand.
    #[must_use]
    pub fn find_measurand(&self, measurand: &str) -> Option<&SampledValue> {
        self.meter_value
            .iter()
            .flat_map(|mv| mv.sampled_value.iter())
            .find(|sv| sv.measurand.as_deref() == Some(measurand))
    }
}
