use actor_framework::tracing::setup_tracing;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use order_service::api::{self, AppState};
use order_service::config::Config;
use order_service::lifecycle::{OrderSystem, SystemSettings};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    setup_tracing(&config.log_level);

    let system = OrderSystem::new(SystemSettings::from(&config));
    let state = AppState {
        catalog: system.catalog.clone(),
        orders: system.order_client.clone(),
    };

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server is running on http://{}", address);

    api::serve(listener, state, shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutdown signal received, stopping services...");
    system.shutdown().await.map_err(|e| anyhow!(e))?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
