//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers. The state contains:
//! - Configuration
//! - The user service backed by the in-memory store

use domain_users::{InMemoryUserRepository, UserService};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones),
/// providing access to:
/// - Application configuration
/// - The user service owning the in-memory store
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// User service; the store lives for the lifetime of the process
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            users: UserService::new(InMemoryUserRepository::new()),
        }
    }
}
