use accounts_service::config::AppConfig;
use accounts_service::lifecycle::{setup_tracing, AppSystem};
use anyhow::Context;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    setup_tracing(&config.logging).map_err(|e| anyhow::anyhow!(e))?;

    info!(
        orders_backend = %config.orders_backend.base_url,
        timeout_ms = config.orders_backend.timeout_ms,
        "Starting accounts service"
    );

    let system = AppSystem::new(&config).context("Failed to start system")?;
    system
        .serve(&config.server.bind_address(), shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    info!("Accounts service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
