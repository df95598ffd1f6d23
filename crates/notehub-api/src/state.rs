//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use notehub_auth::jwt::decoder::JwtDecoder;
use notehub_auth::jwt::encoder::JwtEncoder;
use notehub_core::config::AppConfig;
use notehub_service::note::service::NoteService;
use notehub_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User registration/authentication service.
    pub user_service: Arc<UserService>,
    /// Note service.
    pub note_service: Arc<NoteService>,
}
