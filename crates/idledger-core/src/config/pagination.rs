//! Pagination configuration.

use serde::{Deserialize, Serialize};

/// Defaults and limits for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size applied when the caller does not supply one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Hard upper bound on the caller-supplied page size.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    25
}

fn default_max_page_size() -> u64 {
    100
}
