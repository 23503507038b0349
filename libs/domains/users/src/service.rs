//! User service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for user business logic.
///
/// Presence validation happens here; username uniqueness is enforced by the
/// repository so the check-then-append stays under one lock.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user from the given input
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate().map_err(|_| UserError::MissingFields)?;

        self.repository.create(User::new(input)).await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Get a user by exact username
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> UserResult<User> {
        self.repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| UserError::UsernameNotFound(username.to_string()))
    }

    /// List all users in insertion order
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Apply a partial update to a user.
    ///
    /// The new username is not re-checked for uniqueness: an update may set
    /// a username another user already holds.
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        self.repository.update(id, input).await
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}

// Manual Clone implementation - only requires R to be the same type,
// not R: Clone, since we're cloning the Arc, not R itself
impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
