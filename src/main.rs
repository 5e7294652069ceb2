mod actor_framework;
mod api;
mod app_system;
mod clients;
mod domain;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app_system::{setup_tracing, AppError, Config, UserSystem};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!("Starting user API");

    let system = UserSystem::start(&config)?;
    let app = api::router(system.user_client.clone());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    // The router (and its client clone) is gone once serve returns.
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
