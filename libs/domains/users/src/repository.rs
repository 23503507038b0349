use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};

/// Repository trait for user persistence.
///
/// The store owns the collection; callers receive cloned records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a new user, enforcing username uniqueness
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by exact username
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// List all users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: Uuid, update: UpdateUser) -> UserResult<User>;

    /// Delete a user by ID, reporting whether a record was removed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository.
///
/// Records live in a Vec so listing preserves insertion order, also after
/// deletions in the middle. Check-then-write sequences (uniqueness on
/// create, find-then-mutate on update) hold the write lock throughout.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Exact, case-sensitive match
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::DuplicateUsername(user.username));
        }

        users.push(user.clone());

        tracing::info!(user_id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn update(&self, id: Uuid, update: UpdateUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserError::NotFound(id))?;

        user.apply_update(update);

        tracing::info!(user_id = %id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                tracing::info!(user_id = %id, "Deleted user");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
