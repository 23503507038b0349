use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::ErrorResponse;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User not found: {0}")]
    UsernameNotFound(String),

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("Please provide username, email, and role")]
    MissingFields,
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        // Wire messages are fixed strings; lookups by id and by username
        // share the same body.
        let (status, message) = match &self {
            UserError::NotFound(_) | UserError::UsernameNotFound(_) => {
                (StatusCode::NOT_FOUND, "User not found")
            }
            UserError::DuplicateUsername(_) => {
                (StatusCode::BAD_REQUEST, "Username already exists")
            }
            UserError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Please provide username, email, and role",
            ),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
