//! Client-side aggregation of paginated listings.
//!
//! [`collect_all_pages`] drives any single-page listing operation from page 1
//! until the server-reported page count is reached and returns the
//! concatenated items.
//!
//! # Termination
//!
//! - At least one request is always made, even if page 1 is empty.
//! - The loop stops once `page >= meta.total_pages`. A missing or zero
//!   `total_pages` therefore ends the aggregation after the first page.
//! - Pages are requested strictly one after another.
//! - The first failing page aborts the aggregation; items collected so far
//!   are dropped and the error is returned unchanged.

use std::future::Future;

use crate::clients::ApiError;
use crate::rest::params::PaginationParams;
use crate::rest::response::PaginatedResponse;

/// Page size used when the caller does not choose one.
pub const DEFAULT_AGGREGATION_PAGE_SIZE: u32 = 100;

/// Fetches every page of a listing and concatenates the items in page order.
///
/// `fetch` is called with the page selection for each request; it is
/// expected to forward any filters unchanged.
///
/// # Errors
///
/// Returns the first [`ApiError`] produced by `fetch`.
///
/// # Example
///
/// ```rust,ignore
/// use volttime_api::rest::{collect_all_pages, PaginationParams};
///
/// let sites = collect_all_pages(None, |page| client.get_sites(page)).await?;
/// println!("{} sites in total", sites.len());
/// ```
pub async fn collect_all_pages<T, F, Fut>(
    per_page: Option<u32>,
    mut fetch: F,
) -> Result<Vec<T>, ApiError>
where
    F: FnMut(PaginationParams) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, ApiError>>,
{
    let per_page = per_page
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_AGGREGATION_PAGE_SIZE);
    let mut results = Vec::new();
    let mut page: u32 = 1;

    loop {
        let response = fetch(PaginationParams::new().page(page).per_page(per_page)).await?;
        let total_pages = response.total_pages();

        if response.meta.total_pages.is_none() && response.links.next.is_some() {
            tracing::warn!(
                page,
                next = ?response.links.next,
                "Listing advertises a next page but reports no total_pages; stopping after this page"
            );
        }

        tracing::debug!(
            page,
            total_pages,
            items = response.data.len(),
            "Fetched listing page"
        );

        results.extend(response.into_items());

        if page >= total_pages {
            break;
        }
        page += 1;
    }

    Ok(results)
}
