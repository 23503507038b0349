use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity held by the in-memory store.
///
/// Timestamps serialize in camelCase (`createdDate`, `updatedDate`) to match
/// the public API shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: Uuid,
    /// Username (unique among live users)
    pub username: String,
    /// Contact email, stored as given
    pub email: String,
    /// Free-form role label
    pub role: String,
    /// Creation timestamp, never modified after creation
    pub created_date: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_date: DateTime<Utc>,
}

/// DTO for creating a new user.
///
/// All three fields are required and must be non-empty; a missing key
/// deserializes to the empty string and fails validation with the same
/// message.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide username, email, and role"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide username, email, and role"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide username, email, and role"))]
    pub role: String,
}

/// DTO for partially updating an existing user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl User {
    /// Create a new user from the CreateUser DTO
    pub fn new(input: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            role: input.role,
            created_date: now,
            updated_date: now,
        }
    }

    /// Apply a partial update.
    ///
    /// An empty string counts as "not supplied": the field keeps its current
    /// value. `updated_date` advances even when no field changes.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(username) = update.username.filter(|v| !v.is_empty()) {
            self.username = username;
        }
        if let Some(email) = update.email.filter(|v| !v.is_empty()) {
            self.email = email;
        }
        if let Some(role) = update.role.filter(|v| !v.is_empty()) {
            self.role = role;
        }
        self.updated_date = Utc::now();
    }
}
