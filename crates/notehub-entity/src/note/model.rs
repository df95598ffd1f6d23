//! Note entity model.
//!
//! `Note.author` holds the owning user's username as a plain foreign-key
//! value. Resolving the owning [`User`](crate::User) is a separate explicit
//! lookup, never an automatically-traversed reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A text note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: i32,
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Whether the note is readable/searchable by anyone.
    pub public: bool,
    /// Username of the owning user. Immutable after creation.
    pub author: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub modified_at: DateTime<Utc>,
}

/// Data required to create a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// Note title.
    pub title: String,
    /// Note body.
    pub content: String,
    /// Read visibility.
    pub public: bool,
    /// Owning username. Must name an existing user.
    pub author: String,
}

/// Data for updating an existing note.
///
/// Updates are full field replacement, not a partial patch; `author` and
/// `id` are immutable and therefore absent here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNote {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
    /// New visibility.
    pub public: bool,
}
