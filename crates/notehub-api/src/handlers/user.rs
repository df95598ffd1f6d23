//! User handlers — registration.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{RegisterRequest, validate_request};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    validate_request(&req)?;

    let user = state
        .user_service
        .register(&req.username, &req.password, req.full_name)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
