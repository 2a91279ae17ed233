use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{debug, info, warn};

mod bootstrap;
mod config;
mod shutdown;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Merge .env into the process environment before reading any config
    let dotenv_path = core_config::load_dotenv();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    match dotenv_path {
        Some(path) => debug!("Loaded environment from {}", path.display()),
        None => debug!("No .env file found, using process environment only"),
    }

    info!(
        "Starting {} v{} (startup policy: {})",
        config.app.name, config.app.version, config.startup_policy
    );

    let mongo_client =
        bootstrap::connect_database(&config.mongodb, config.startup_policy).await?;

    let state = AppState {
        config,
        mongo_client,
    };

    if state.is_degraded() {
        warn!("Running in degraded mode: database-backed features are unavailable");
    } else {
        info!("Ready with MongoDB database '{}'", state.database()?.name());
    }

    shutdown::shutdown_signal().await?;

    if let Some(client) = state.mongo_client {
        info!("Shutting down: closing MongoDB connections");
        client.shutdown().await;
        info!("MongoDB connection closed successfully");
    }

    info!("{} shutdown complete", state.config.app.name);
    Ok(())
}
