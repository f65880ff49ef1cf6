//! Response envelopes for VoltTime listing endpoints.
//!
//! The API uses two list shapes:
//!
//! - Paginated listings (`/sites`, `/chargers`, `/sites/{uuid}/transactions`):
//!   `{ "data": [...], "links": {...}, "meta": { "current_page", "per_page", "total_pages", ... } }`,
//!   decoded as [`PaginatedResponse<T>`].
//! - Plain lists (`/tariffs`, `/providers`, `/products`): `{ "data": [...] }`,
//!   decoded as [`DataEnvelope<T>`] and unwrapped by the client.
//!
//! # Deref Pattern
//!
//! `PaginatedResponse<T>` implements `Deref<Target = Vec<T>>`, so a page can
//! be iterated and indexed directly:
//!
//! ```rust,ignore
//! let sites = client.get_sites(PaginationParams::new().per_page(10)).await?;
//!
//! println!("Found {} sites", sites.len());
//! for site in sites.iter() {
//!     println!("{} ({}, {})", site.name, site.city, site.country);
//! }
//!
//! if sites.has_next_page() {
//!     // fetch sites.next_page_number()...
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// Position of a page within the full result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// The 1-based number of this page.
    #[serde(default)]
    pub current_page: u32,
    /// The page size the server applied.
    #[serde(default)]
    pub per_page: u32,
    /// Total number of pages, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// URL of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page_url: Option<String>,
    /// 1-based index of the first item on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    /// 1-based index of the last item on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    /// Base path of the listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Navigation URLs of a paginated listing.
///
/// Informational only; the pagination helpers drive off [`PageMeta`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    /// URL of the first page.
    #[serde(default)]
    pub first: Option<String>,
    /// URL of the last page.
    #[serde(default)]
    pub last: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub prev: Option<String>,
    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
}

/// One page of a paginated listing.
///
/// # Example
///
/// ```rust
/// use volttime_api::rest::{PageMeta, PaginatedResponse};
/// use serde_json::json;
///
/// let page: PaginatedResponse<u32> = serde_json::from_value(json!({
///     "data": [1, 2, 3],
///     "links": {"next": "https://app.plugchoice.com/api/v3/sites?page=2"},
///     "meta": {"current_page": 1, "per_page": 3, "total_pages": 2}
/// })).unwrap();
///
/// assert_eq!(page.len(), 3);
/// assert_eq!(page[0], 1);
/// assert!(page.has_next_page());
/// assert_eq!(page.next_page_number(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Navigation URLs.
    #[serde(default)]
    pub links: PaginationLinks,
    /// Page position metadata. Absent `meta` decodes as the default.
    #[serde(default)]
    pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data
    }

    /// Returns the total page count reported by the server, or 0 when it is
    /// absent.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.meta.total_pages.unwrap_or(0)
    }

    /// Returns `true` if the server reports pages after this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.meta.current_page < self.total_pages()
    }

    /// Returns the number of the following page, if any.
    #[must_use]
    pub fn next_page_number(&self) -> Option<u32> {
        self.has_next_page().then(|| self.meta.current_page + 1)
    }

    /// Transforms the items while keeping the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            links: self.links,
            meta: self.meta,
        }
    }
}

impl<T> Deref for PaginatedResponse<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for PaginatedResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// The `{ "data": [...] }` envelope of non-paginated lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// The wrapped items.
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    /// Consumes the envelope and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}
