//! JSON extractor with automatic validation using the validator crate.

use crate::errors::ErrorResponse;
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body and runs the `validator` crate's `Validate`
/// on it. Malformed bodies keep the status from axum's JSON rejection; a
/// failed validation rejects with a 400 carrying the first declared field
/// message. Both use the standard single-field error body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 1, message = "Please provide a username"))]
///     username: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.username)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            (e.status(), Json(ErrorResponse::new(e.body_text()))).into_response()
        })?;

        data.validate().map_err(|e| {
            let message = e
                .field_errors()
                .into_values()
                .flat_map(|errors| errors.iter().filter_map(|err| err.message.clone()))
                .map(|message| message.to_string())
                .next()
                .unwrap_or_else(|| "Request validation failed".to_string());

            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
