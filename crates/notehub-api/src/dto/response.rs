//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notehub_entity::note::Note;
use notehub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i32,
    /// Username.
    pub username: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last modified at.
    pub modified_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Token type, always `"bearer"`.
    pub token_type: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Note representation in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    /// Note ID.
    pub id: i32,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Read visibility.
    pub public: bool,
    /// Owning username.
    pub author: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last modified at.
    pub modified_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            public: note.public,
            author: note.author,
            created_at: note.created_at,
            modified_at: note.modified_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Server version.
    pub version: String,
}
