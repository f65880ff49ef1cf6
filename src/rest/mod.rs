//! Typed REST layer of the VoltTime API SDK.
//!
//! This module provides:
//!
//! - [`PaginatedResponse<T>`] and [`DataEnvelope<T>`]: the two list envelopes
//! - [`PaginationParams`] and [`TransactionParams`]: listing query parameters
//! - [`collect_all_pages`]: client-side aggregation of paginated listings
//! - [`resources`]: resource models per API version

mod pagination;
mod params;
pub mod resources;
mod response;

pub use pagination::{collect_all_pages, DEFAULT_AGGREGATION_PAGE_SIZE};
pub use params::{PaginationParams, TransactionParams};
pub use response::{DataEnvelope, PageMeta, PaginatedResponse, PaginationLinks};
