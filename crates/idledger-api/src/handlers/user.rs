//! User handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use idledger_core::error::AppError;

use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(UserResponse::from_user(user))))
}
