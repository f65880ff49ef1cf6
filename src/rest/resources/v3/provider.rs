use serde::{Deserialize, Serialize};

/// An OCPP backend that chargers can be connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    /// OCPP-J endpoint chargers should connect to.
    pub websocket_url: String,
}
