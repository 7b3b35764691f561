//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request. The page number is floored at 1 and the
    /// page size clamped into `1..=max_page_size`.
    pub fn new(page: u64, page_size: u64, max_page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_page_size.max(1)),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size.max(1))
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Create an empty response carrying the caller's paging parameters.
    ///
    /// This is the terminal empty result: zero items, zero total. Returned
    /// without touching storage when a supplied reference filter does not
    /// resolve.
    pub fn empty(page_request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            page: page_request.page,
            page_size: page_request.page_size,
            total_items: 0,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        }
    }

    /// Project the page items into another type, keeping the paging
    /// metadata intact.
    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }

    /// Whether this page carries no items and no total.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.total_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps() {
        let page = PageRequest::new(0, 500, 100);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }

    #[test]
    fn test_offset_and_limit() {
        let page = PageRequest::new(3, 25, 100);
        assert_eq!(page.offset(), 50);
        assert_eq!(page.limit(), 25);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let resp = PageResponse::new(vec![1, 2, 3], 1, 3, 7);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
        assert!(!resp.has_previous);
    }

    #[test]
    fn test_empty_reports_zero_total() {
        let page = PageRequest::new(4, 10, 100);
        let resp = PageResponse::<i32>::empty(&page);
        assert!(resp.is_empty());
        assert_eq!(resp.page, 4);
        assert_eq!(resp.total_pages, 1);
        assert!(!resp.has_next);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let resp = PageResponse::new(vec![1, 2], 2, 2, 5).map(|n| n.to_string());
        assert_eq!(resp.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(resp.total_items, 5);
        assert_eq!(resp.page, 2);
        assert!(resp.has_previous);
    }
}
