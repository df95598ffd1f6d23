//! # notehub-api
//!
//! HTTP API layer for NoteHub built on Axum.
//!
//! Provides all REST endpoints, middleware (CORS, compression, trace,
//! request logging), the authentication extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use state::AppState;
