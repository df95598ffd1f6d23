//! # notehub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for the NoteHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
