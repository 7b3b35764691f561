//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use idledger_core::config::pagination::PaginationConfig;
use idledger_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page. Falls back to the configured default when absent
    /// and is clamped to the configured maximum.
    pub per_page: Option<u64>,
}

fn default_page() -> u64 {
    1
}

impl PaginationParams {
    /// Converts to a `PageRequest` under the configured limits.
    pub fn into_page_request(self, config: &PaginationConfig) -> PageRequest {
        let per_page = self.per_page.unwrap_or(config.default_page_size);
        PageRequest::new(self.page, per_page, config.max_page_size)
    }
}
