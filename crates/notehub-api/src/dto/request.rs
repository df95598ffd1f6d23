//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use notehub_core::error::AppError;

/// Checks a request body against its `validator` rules, mapping failures
/// into the unified Validation error so they reject before reaching the
/// stores.
pub fn validate_request(req: &impl Validate) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Password (policy-checked separately by the user service).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    pub full_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Note create/update request body. Updates are full field replacement,
/// so create and update share one shape; `author` is never accepted here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteRequest {
    /// Note title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    /// Note body.
    pub content: String,
    /// Read visibility.
    pub public: bool,
}

/// Query parameters for note search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Substring to look for in title or content.
    pub text: String,
    /// Restrict results to one author (public search only).
    pub author: Option<String>,
}

/// Query parameters for public note listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicListParams {
    /// Restrict results to one author.
    pub author: Option<String>,
}
