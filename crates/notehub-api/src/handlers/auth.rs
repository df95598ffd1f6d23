//! Auth handlers — login and me.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{LoginRequest, validate_request};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate_request(&req)?;

    let user = state
        .user_service
        .authenticate(&req.username, &req.password)
        .await?;

    let access = state
        .jwt_encoder
        .generate_access_token(user.id, &user.username)?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: access.token,
        token_type: "bearer".to_string(),
        expires_at: access.expires_at,
        user: UserResponse::from(user),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
