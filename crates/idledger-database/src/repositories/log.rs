//! Generation log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use idledger_core::error::{AppError, ErrorKind};
use idledger_core::result::AppResult;
use idledger_core::sanitize::escape_like;
use idledger_core::types::pagination::{PageRequest, PageResponse};
use idledger_entity::log::{LogEntry, LogEntryFilter};

/// Repository for the append-only generation log.
///
/// Read-only: the log is written by the identifier-generation subsystem,
/// never through this repository.
#[derive(Debug, Clone)]
pub struct LogEntryRepository {
    pool: PgPool,
}

impl LogEntryRepository {
    /// Create a new log entry repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a log entry by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LogEntry>> {
        sqlx::query_as::<_, LogEntry>("SELECT * FROM generation_log WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find log entry", e)
            })
    }

    /// Search the generation log with resolved filter criteria.
    ///
    /// All supplied dimensions combine with AND; date bounds are
    /// inclusive; substring dimensions match case-insensitively with
    /// LIKE wildcards in the user input escaped to literals.
    pub async fn search(
        &self,
        filter: &LogEntryFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<LogEntry>> {
        let identifier_pattern = filter
            .identifier
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)));
        let comment_pattern = filter
            .comment
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)));

        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.source_id.is_some() {
            conditions.push(format!("source_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.generated_by.is_some() {
            conditions.push(format!("generated_by = ${param_idx}"));
            param_idx += 1;
        }
        if filter.date_from.is_some() {
            conditions.push(format!("generated_at >= ${param_idx}"));
            param_idx += 1;
        }
        if filter.date_to.is_some() {
            conditions.push(format!("generated_at <= ${param_idx}"));
            param_idx += 1;
        }
        if identifier_pattern.is_some() {
            conditions.push(format!("identifier ILIKE ${param_idx}"));
            param_idx += 1;
        }
        if comment_pattern.is_some() {
            conditions.push(format!("comment ILIKE ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM generation_log {where_clause}");
        let select_sql = format!(
            "SELECT * FROM generation_log {where_clause} \
             ORDER BY generated_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, LogEntry>(&select_sql);

        if let Some(source_id) = filter.source_id {
            count_query = count_query.bind(source_id);
            select_query = select_query.bind(source_id);
        }
        if let Some(generated_by) = filter.generated_by {
            count_query = count_query.bind(generated_by);
            select_query = select_query.bind(generated_by);
        }
        if let Some(from) = filter.date_from {
            count_query = count_query.bind(from);
            select_query = select_query.bind(from);
        }
        if let Some(to) = filter.date_to {
            count_query = count_query.bind(to);
            select_query = select_query.bind(to);
        }
        if let Some(pattern) = &identifier_pattern {
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern.clone());
        }
        if let Some(pattern) = &comment_pattern {
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern.clone());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count log entries", e)
        })?;

        let entries = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search generation log", e)
            })?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
