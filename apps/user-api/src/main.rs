use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::path::Path;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Initialize the application state with the in-memory user store
    let state = AppState::new(config);

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs and static assets at the web root
    let router = axum_helpers::create_router::<openapi::ApiDoc>(
        api_routes,
        Some(Path::new(&state.config.public_dir)),
    );

    // Merge the health endpoint
    let app = router.merge(health_router(state.config.app.clone()));

    info!(
        "Starting user API on {} (assets from '{}')",
        state.config.server.address(),
        state.config.public_dir
    );

    // Serve with graceful shutdown
    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User API shutdown complete");
    Ok(())
}
