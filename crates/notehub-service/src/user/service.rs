//! User registration, authentication, and profile lookup.

use std::sync::Arc;

use tracing::info;

use notehub_auth::password::{PasswordHasher, PasswordValidator};
use notehub_core::error::AppError;
use notehub_database::repositories::user::UserRepository;
use notehub_entity::user::model::CreateUser;
use notehub_entity::user::User;

use crate::context::RequestContext;

/// The one message used for every authentication failure. Using the same
/// text for "no such user" and "wrong password" prevents username
/// enumeration.
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Handles user registration, authentication, and profile lookups.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// Registers a new user.
    ///
    /// The password is policy-checked and hashed before anything touches
    /// the database; a duplicate username surfaces as a Conflict from the
    /// repository and leaves the existing record unmodified.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        full_name: Option<String>,
    ) -> Result<User, AppError> {
        self.validator.validate(password)?;

        let hashed_password = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                hashed_password,
                full_name,
            })
            .await?;

        info!(username = %user.username, "User registered");

        Ok(user)
    }

    /// Authenticates a user by username and password.
    ///
    /// Fails identically for an unknown username and a wrong password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let valid = self
            .hasher
            .verify_password(password, &user.hashed_password)?;
        if !valid {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
