//! Custom query parameter extractors.

pub mod pagination;

pub use pagination::PaginationParams;
