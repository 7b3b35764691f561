//! Identifier source handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use idledger_core::error::AppError;
use idledger_core::types::pagination::PageResponse;

use crate::dto::response::{ApiResponse, SourceResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/source
pub async fn list_sources(
    State(state): State<AppState>,
    Query(paging): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<SourceResponse>>>, ApiError> {
    let page = paging.into_page_request(&state.config.pagination);
    let result = state.source_repo.find_all(&page).await?;

    Ok(Json(ApiResponse::ok(result.map(SourceResponse::from_source))))
}

/// GET /api/source/{id}
pub async fn get_source(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SourceResponse>>, ApiError> {
    let source = state
        .source_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Identifier source not found"))?;

    Ok(Json(ApiResponse::ok(SourceResponse::from_source(source))))
}
