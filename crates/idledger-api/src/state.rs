//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use idledger_core::config::AppConfig;
use idledger_database::DatabasePool;
use idledger_database::repositories::{LogEntryRepository, SourceRepository, UserRepository};
use idledger_service::LogQueryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, used directly by the health probe.
    pub db: DatabasePool,
    /// Identifier source repository.
    pub source_repo: Arc<SourceRepository>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Generation log repository.
    pub log_repo: Arc<LogEntryRepository>,
    /// The log query resolution service.
    pub log_query: Arc<LogQueryService>,
}
