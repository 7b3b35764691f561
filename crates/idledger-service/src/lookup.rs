//! Collaborator seams for reference lookups and log retrieval.
//!
//! The query service depends on these traits rather than on the concrete
//! repositories, so resolution and composition logic can be exercised
//! against in-memory implementations.

use async_trait::async_trait;
use uuid::Uuid;

use idledger_core::result::AppResult;
use idledger_core::types::pagination::{PageRequest, PageResponse};
use idledger_database::repositories::{LogEntryRepository, SourceRepository, UserRepository};
use idledger_entity::log::{LogEntry, LogEntryFilter};
use idledger_entity::source::IdentifierSource;
use idledger_entity::user::User;

/// Lookup of identifier sources by external identifier.
#[async_trait]
pub trait SourceLookup: Send + Sync {
    /// Find a source by its external identifier.
    async fn source_by_id(&self, id: Uuid) -> AppResult<Option<IdentifierSource>>;
}

/// Lookup of users by external identifier.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Find a user by their external identifier.
    async fn user_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Filtered, paginated retrieval over the generation log.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Retrieve log entries matching all supplied filter dimensions
    /// (AND semantics), wrapped in a pagination envelope.
    async fn search(
        &self,
        filter: &LogEntryFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<LogEntry>>;
}

#[async_trait]
impl SourceLookup for SourceRepository {
    async fn source_by_id(&self, id: Uuid) -> AppResult<Option<IdentifierSource>> {
        self.find_by_id(id).await
    }
}

#[async_trait]
impl UserLookup for UserRepository {
    async fn user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.find_by_id(id).await
    }
}

#[async_trait]
impl LogStore for LogEntryRepository {
    async fn search(
        &self,
        filter: &LogEntryFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<LogEntry>> {
        LogEntryRepository::search(self, filter, page).await
    }
}
