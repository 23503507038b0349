use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Directory of static assets served at the web root
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let public_dir = env_or_default("PUBLIC_DIR", "public");

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            public_dir,
        })
    }
}
