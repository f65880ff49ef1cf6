//! Request error type for the VoltTime API SDK.
//!
//! Every failure of a request, whatever its cause, is reported as a single
//! [`ApiError`]. The presence of [`ApiError::status_code`] tells whether the
//! server answered:
//!
//! - **Server-rejected** (`Some(status)`): the API returned a non-2xx status.
//!   The server message and raw body are attached. A body that breaks off
//!   after the status arrived is reported the same way, without a payload.
//! - **Transport-failed** (`None`): no response was received (DNS, connect,
//!   timeout).
//! - **Decode-failed** (`Some(status)`, [`ApiErrorKind::Decode`]): the server
//!   answered successfully but the body did not match the expected model.
//!
//! # Example
//!
//! ```rust,ignore
//! use volttime_api::{ApiError, VoltTimeClient};
//!
//! match client.get_site("abc").await {
//!     Ok(site) => println!("Site: {}", site.name),
//!     Err(e) if e.is_not_found() => println!("No such site"),
//!     Err(e) if e.is_transport() => println!("Network unreachable: {e}"),
//!     Err(e) => println!("API error {:?}: {}", e.status_code, e.message),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for VoltTime API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// The failure mode behind an [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server answered with a non-2xx status.
    Response,
    /// No response was received.
    Transport,
    /// A successful response could not be decoded into the expected type.
    Decode,
}

/// Error returned by every VoltTime API operation.
///
/// # Example
///
/// ```rust
/// use volttime_api::{ApiError, ApiErrorKind};
/// use serde_json::json;
///
/// let error = ApiError::from_response(404, json!({"message": "Site not found"}));
///
/// assert_eq!(error.status_code, Some(404));
/// assert_eq!(error.message, "Site not found");
/// assert_eq!(error.kind, ApiErrorKind::Response);
/// assert!(error.is_not_found());
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code, present only when a response was received.
    pub status_code: Option<u16>,
    /// Decoded response body, present only when a response was received.
    pub response_data: Option<Value>,
    /// The failure mode.
    pub kind: ApiErrorKind,
}

impl ApiError {
    /// Creates an error for a response with a failure status.
    ///
    /// The message is taken from the body's `message` field when it is a
    /// string, and falls back to a generic HTTP error text otherwise.
    #[must_use]
    pub fn from_response(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map_or_else(
                || format!("Request failed with status code {status}"),
                ToString::to_string,
            );

        Self {
            message,
            status_code: Some(status),
            response_data: Some(body),
            kind: ApiErrorKind::Response,
        }
    }

    /// Creates an error for a response whose body could not be read after
    /// the status line arrived.
    ///
    /// The status is kept so that `status_code` stays `None` only for
    /// requests that never received a response.
    #[must_use]
    pub fn unreadable_body(status: u16, reason: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Failed to read response body: {reason}"),
            status_code: Some(status),
            response_data: None,
            kind: ApiErrorKind::Response,
        }
    }

    /// Creates an error for a request that never received a response.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            response_data: None,
            kind: ApiErrorKind::Transport,
        }
    }

    /// Creates an error for a successful response whose body could not be
    /// decoded.
    #[must_use]
    pub fn decode(status: u16, body: Value, source: &serde_json::Error) -> Self {
        Self {
            message: format!("Failed to decode response body: {source}"),
            status_code: Some(status),
            response_data: Some(body),
            kind: ApiErrorKind::Decode,
        }
    }

    /// Returns `true` if no response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind == ApiErrorKind::Transport
    }

    /// Returns `true` if the server rejected the request.
    #[must_use]
    pub fn is_response(&self) -> bool {
        self.kind == ApiErrorKind::Response
    }

    /// Returns `true` if the response body did not match the expected model.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        self.kind == ApiErrorKind::Decode
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.is_response() && self.status_code == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::transport(error.to_string())
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
