//! User resource.
//!
//! Returned by `GET /user` (the authenticated user) and `GET /user/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account on the VoltTime platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Public identifier.
    pub uuid: String,
    /// Numeric identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Identity verification hashes for the Intercom messenger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercom: Option<IntercomHashes>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Per-platform Intercom HMAC hashes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntercomHashes {
    #[serde(default)]
    pub hmac_android: Option<String>,
    #[serde(default)]
    pub hmac_ios: Option<String>,
    #[serde(default)]
    pub hmac_web: Option<String>,
}
