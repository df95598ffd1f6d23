//! Application builder — wires repositories, services, and state, and runs
//! the HTTP server.

use std::sync::Arc;

use sqlx::PgPool;

use notehub_auth::jwt::decoder::JwtDecoder;
use notehub_auth::jwt::encoder::JwtEncoder;
use notehub_auth::password::hasher::PasswordHasher;
use notehub_auth::password::validator::PasswordValidator;
use notehub_core::config::AppConfig;
use notehub_core::error::AppError;
use notehub_database::repositories::note::NoteRepository;
use notehub_database::repositories::user::UserRepository;
use notehub_service::note::service::NoteService;
use notehub_service::user::service::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a connected pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let note_repo = Arc::new(NoteRepository::new(db_pool.clone()));

    // Auth system
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // Services
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let note_service = Arc::new(NoteService::new(Arc::clone(&note_repo)));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        user_service,
        note_service,
    }
}

/// Runs the NoteHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("NoteHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("NoteHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
