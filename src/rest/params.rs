//! Query parameters for VoltTime listing endpoints.
//!
//! Unset values are never sent, so the server applies its own defaults.

use std::collections::BTreeMap;

/// Page selection for paginated listings.
///
/// # Example
///
/// ```rust
/// use volttime_api::rest::PaginationParams;
///
/// let params = PaginationParams::new().page(2).per_page(25);
/// let query = params.to_query();
///
/// assert_eq!(query.get("page"), Some(&"2".to_string()));
/// assert_eq!(query.get("per_page"), Some(&"25".to_string()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// The 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Creates empty parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            per_page: None,
        }
    }

    /// Sets the page number. Values below 1 are raised to 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    /// Sets the page size. Values below 1 are raised to 1.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page.max(1));
        self
    }

    /// Renders the set values as query parameters.
    #[must_use]
    pub fn to_query(&self) -> BTreeMap<String, String> {
        let mut query = BTreeMap::new();
        if let Some(page) = self.page {
            query.insert("page".to_string(), page.to_string());
        }
        if let Some(per_page) = self.per_page {
            query.insert("per_page".to_string(), per_page.to_string());
        }
        query
    }
}

/// Parameters for site transaction listings.
///
/// Besides page selection, arbitrary server-side filters can be attached.
/// Filters are sent unchanged on every page of an aggregated listing.
///
/// # Example
///
/// ```rust
/// use volttime_api::rest::TransactionParams;
///
/// let params = TransactionParams::new()
///     .per_page(50)
///     .filter("charger_id", "17");
///
/// let query = params.to_query();
/// assert_eq!(query.get("charger_id"), Some(&"17".to_string()));
/// assert_eq!(query.get("per_page"), Some(&"50".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionParams {
    /// Page selection.
    pub pagination: PaginationParams,
    /// Additional filters, keyed by query parameter name.
    pub filters: BTreeMap<String, String>,
}

impl TransactionParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.pagination = self.pagination.page(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.pagination = self.pagination.per_page(per_page);
        self
    }

    /// Adds a filter. `page` and `per_page` are reserved and take their
    /// values from the pagination settings instead.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Returns a copy with the given page selection and the same filters.
    #[must_use]
    pub fn with_pagination(&self, pagination: PaginationParams) -> Self {
        Self {
            pagination,
            filters: self.filters.clone(),
        }
    }

    /// Renders filters and page selection as query parameters.
    #[must_use]
    pub fn to_query(&self) -> BTreeMap<String, String> {
        let mut query: BTreeMap<String, String> = self
            .filters
            .iter()
            .filter(|(key, _)| key.as_str() != "page" && key.as_str() != "per_page")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        query.extend(self.pagination.to_query());
        query
    }
}

impl From<PaginationParams> for TransactionParams {
    fn from(pagination: PaginationParams) -> Self {
        Self {
            pagination,
            filters: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_produce_empty_query() {
        assert!(PaginationParams::new().to_query().is_empty());
        assert!(TransactionParams::new().to_query().is_empty());
    }

    #[test]
    fn test_values_below_one_are_clamped() {
        let params = PaginationParams::new().page(0).per_page(0);
        assert_eq!(params.page, Some(1));
        assert_eq!(params.per_page, Some(1));
    }

    #[test]
    fn test_reserved_filter_keys_are_ignored() {
        let params = TransactionParams::new()
            .page(3)
            .filter("page", "99")
            .filter("per_page", "99")
            .filter("status", "completed");

        let query = params.to_query();
        assert_eq!(query.get("page"), Some(&"3".to_string()));
        assert!(!query.contains_key("per_page"));
        assert_eq!(query.get("status"), Some(&"completed".to_string()));
    }

    #[test]
    fn test_with_pagination_keeps_filters() {
        let params = TransactionParams::new().page(1).filter("status", "active");
        let next = params.with_pagination(PaginationParams::new().page(2).per_page(100));

        assert_eq!(next.filters, params.filters);
        assert_eq!(next.pagination.page, Some(2));
        assert_eq!(next.pagination.per_page, Some(100));
    }
}
