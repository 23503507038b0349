pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error returned by an API carries this single-field JSON shape:
///
/// ```json
/// { "message": "User not found" }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
