//! Identifier source repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use idledger_core::error::{AppError, ErrorKind};
use idledger_core::result::AppResult;
use idledger_core::types::pagination::{PageRequest, PageResponse};
use idledger_entity::source::IdentifierSource;

/// Repository for identifier source lookups.
#[derive(Debug, Clone)]
pub struct SourceRepository {
    pool: PgPool,
}

impl SourceRepository {
    /// Create a new source repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a source by its external identifier.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<IdentifierSource>> {
        sqlx::query_as::<_, IdentifierSource>("SELECT * FROM identifier_sources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find source", e))
    }

    /// Find a source by name (case-insensitive).
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<IdentifierSource>> {
        sqlx::query_as::<_, IdentifierSource>(
            "SELECT * FROM identifier_sources WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find source by name", e)
        })
    }

    /// List all sources with pagination, retired ones included.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<IdentifierSource>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identifier_sources")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count sources", e)
            })?;

        let sources = sqlx::query_as::<_, IdentifierSource>(
            "SELECT * FROM identifier_sources ORDER BY name LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sources", e))?;

        Ok(PageResponse::new(
            sources,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
