//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user in the NoteHub system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i32,
    /// Unique login name. Case-sensitive and immutable once set; notes
    /// reference their author by this value.
    pub username: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Human-readable display name.
    pub full_name: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub modified_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub hashed_password: String,
    /// Display name (optional).
    pub full_name: Option<String>,
}
