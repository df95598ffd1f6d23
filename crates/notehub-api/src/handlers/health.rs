//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .is_ok();

    let (status, database) = if database_ok {
        ("ok", "connected")
    } else {
        ("degraded", "unreachable")
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
