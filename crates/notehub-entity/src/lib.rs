//! # notehub-entity
//!
//! Domain entity models for NoteHub. Every struct in this crate represents
//! a database table row or a creation/update payload. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod note;
pub mod user;

pub use note::Note;
pub use user::User;
