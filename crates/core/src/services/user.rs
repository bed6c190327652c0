//! User service.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use dormrate_common::{AppError, AppResult};
use dormrate_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// User service for business logic.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

/// Input for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(length(min = 1, max = 125))]
    pub username: String,

    #[validate(email, length(max = 125))]
    pub email: String,

    #[validate(length(min = 8, max = 125))]
    pub password: String,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Register a new user.
    ///
    /// The username and email must both be unused. Passwords are stored
    /// as argon2 hashes only.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<user::Model> {
        input.validate()?;

        // Check both unique keys up front so the error can name the field;
        // the unique indexes still back this up under concurrency.
        if self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "username already registered: {}",
                input.username
            )));
        }

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "email already registered: {}",
                input.email
            )));
        }

        let password_hash = hash_password(&input.password)?;

        let model = user::ActiveModel {
            username: Set(input.username.clone()),
            email: Set(input.email),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now().into()),
        };

        let created = self.user_repo.create(model).await?;
        tracing::info!(username = %created.username, "Registered user");
        Ok(created)
    }

    /// Look up a single user.
    pub async fn get(&self, username: &str) -> AppResult<user::Model> {
        self.user_repo.get_by_username(username).await
    }

    /// List all users.
    pub async fn list(&self) -> AppResult<Vec<user::Model>> {
        self.user_repo.find_all().await
    }

    /// Delete a user, returning the number of rows removed.
    ///
    /// Follow edges and authored posts, comments and ratings go with the
    /// user via storage-layer cascades.
    pub async fn delete(&self, username: &str) -> AppResult<u64> {
        let count = self.user_repo.delete(username).await?;
        if count == 0 {
            return Err(AppError::UserNotFound(username.to_string()));
        }
        tracing::info!(username = %username, "Deleted user");
        Ok(count)
    }
}

/// Hash a password with argon2 and a fresh salt.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
#[cfg(test)]
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
