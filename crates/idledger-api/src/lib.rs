//! # idledger-api
//!
//! HTTP API layer for idledger built on Axum.
//!
//! Provides the log query endpoints, reference reads, health check,
//! extractors, DTOs, request logging, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
