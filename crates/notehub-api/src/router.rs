//! Route definitions for the NoteHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use notehub_core::config::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(note_routes())
        .merge(public_note_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// User registration (open to anyone)
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(handlers::user::register))
}

/// Note CRUD and search for the authenticated owner
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", post(handlers::note::create_note))
        .route("/notes", get(handlers::note::list_my_notes))
        .route("/notes/search", get(handlers::note::search_my_notes))
        .route("/notes/{id}", get(handlers::note::get_note))
        .route("/notes/{id}", put(handlers::note::update_note))
        .route("/notes/{id}", delete(handlers::note::delete_note))
}

/// Public note surface (no auth required)
fn public_note_routes() -> Router<AppState> {
    Router::new()
        .route("/public/notes", get(handlers::note::list_public_notes))
        .route(
            "/public/notes/search",
            get(handlers::note::search_public_notes),
        )
        .route("/public/notes/{id}", get(handlers::note::get_public_note))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
