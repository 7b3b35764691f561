//! Request and response data transfer objects.

pub mod request;
pub mod response;

pub use request::LogEntrySearchParams;
pub use response::{ApiResponse, LogEntryResponse, SourceResponse, UserResponse};
