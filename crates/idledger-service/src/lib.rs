//! # idledger-service
//!
//! Query resolution for the identifier-generation log: translating raw,
//! optional, loosely-typed filter parameters into a typed query against
//! the log store.
//!
//! Services follow constructor injection — all collaborators are provided
//! at construction time via `Arc` references; nothing is resolved from
//! ambient global state.

pub mod lookup;
pub mod resolve;
pub mod search;

pub use lookup::{LogStore, SourceLookup, UserLookup};
pub use resolve::Resolution;
pub use search::{LogQueryService, LogSearchRequest};
