use clientes_service::api::{self, AppState};
use clientes_service::lifecycle::{setup_tracing, ClienteSystem, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load()?;
    info!(
        bind_addr = %config.bind_addr,
        min_age = config.min_age,
        "Starting clientes service"
    );

    let system = ClienteSystem::new(&config);

    api::serve(config.bind_addr, AppState::from(&system), shutdown_signal()).await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
