//! HTTP client types for VoltTime API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the VoltTime API and the resource client built on top of it.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client; the single place where requests
//!   are authenticated and failures are mapped to [`ApiError`]
//! - [`HttpRequest`]: A GET request to be sent to the API
//! - [`HttpResponse`]: A received response with its decoded JSON body
//! - [`ApiError`]: The error returned by every operation
//! - [`rest::VoltTimeClient`]: The resource client
//!
//! # Error Mapping
//!
//! | Outcome | `status_code` | `response_data` | `kind` |
//! |---|---|---|---|
//! | 2xx, body matches | - | - | (no error) |
//! | 2xx, body mismatch | `Some(status)` | raw body | `Decode` |
//! | non-2xx | `Some(status)` | raw body | `Response` |
//! | no response | `None` | `None` | `Transport` |
//!
//! No request is ever retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiError, ApiErrorKind, Result};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::VoltTimeClient;
