//! Hunt Simulator Server
//!
//! Serves the `/hunter` HTTP API with a white shark hunting a tuna.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hunt_sim::{
    VERSION,
    network::{HuntServer, ServerConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    info!("Hunt Simulator v{}", VERSION);
    info!("Max time to catch: {}", config.max_time_to_catch);
    info!("Hunter speed: {}, prey speed: {}", config.hunter_speed, config.prey_speed);

    let server = HuntServer::new(config);
    server.run().await.context("hunt server failed")?;

    info!("Hunt server stopped");
    Ok(())
}
