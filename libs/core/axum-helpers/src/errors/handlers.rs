use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback for requests matching no route and, when
/// static assets are enabled, no file.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new("The requested resource was not found"));

    (StatusCode::NOT_FOUND, body).into_response()
}
