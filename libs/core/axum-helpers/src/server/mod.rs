//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with OpenAPI documentation and static assets
//! - Health endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//! use std::path::Path;
//!
//! // Create router with API documentation and static assets
//! let router = create_router::<ApiDoc>(api_routes, Some(Path::new("public")));
//!
//! // Add the health endpoint
//! let app = router.merge(health_router(app_info!()));
//!
//! // Start server with graceful shutdown
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
