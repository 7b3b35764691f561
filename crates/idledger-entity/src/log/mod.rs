//! Generation log domain entities.

pub mod filter;
pub mod model;

pub use filter::LogEntryFilter;
pub use model::LogEntry;
