//! Generation log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use idledger_core::error::AppError;
use idledger_core::types::pagination::PageResponse;

use crate::dto::request::LogEntrySearchParams;
use crate::dto::response::{ApiResponse, LogEntryResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/logentry
///
/// Filtered, paginated search over the generation log. A supplied
/// `source` or `generatedBy` that resolves to no entity yields a 200
/// with an empty page; a malformed date yields a 400 naming the
/// parameter.
pub async fn search_log_entries(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
    Query(params): Query<LogEntrySearchParams>,
) -> Result<Json<ApiResponse<PageResponse<LogEntryResponse>>>, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let page = paging.into_page_request(&state.config.pagination);
    let result = state
        .log_query
        .search(&params.into_request(), &page)
        .await?;

    Ok(Json(ApiResponse::ok(
        result.map(LogEntryResponse::from_entry),
    )))
}

/// GET /api/logentry/{id}
pub async fn get_log_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LogEntryResponse>>, ApiError> {
    let entry = state
        .log_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Log entry not found"))?;

    Ok(Json(ApiResponse::ok(LogEntryResponse::from_entry(entry))))
}
