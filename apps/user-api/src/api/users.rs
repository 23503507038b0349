//! User management routes

use axum::Router;
use domain_users::handlers;

use crate::state::AppState;

/// Create the users router backed by the state-held service.
///
/// The service (and with it the store) is created once in `AppState::new`;
/// handlers share it through cheap clones.
pub fn router(state: &AppState) -> Router {
    handlers::router(state.users.clone())
}
