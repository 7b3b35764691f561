//! # idledger-core
//!
//! Core crate for idledger. Contains configuration schemas, pagination
//! types, text escaping helpers, and the unified error system.
//!
//! This crate has **no** internal dependencies on other idledger crates.

pub mod config;
pub mod error;
pub mod result;
pub mod sanitize;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
