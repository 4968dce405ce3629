//! Fire Alerts Server - Binary Entry Point
//!
//! Loads the bootstrap dataset and serves the alert endpoints over HTTP.

use std::sync::Arc;

use log::{error, info};

use fire_alerts::api::{create_router, AppState};
use fire_alerts::{AlertsResult, Dataset, ServerConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> AlertsResult<()> {
    let config = ServerConfig::from_env()?;
    info!("{} v{} starting", fire_alerts::NAME, fire_alerts::VERSION);

    let engine = Dataset::load(&config.data_file)?.into_engine();
    let state = Arc::new(AppState::new(Arc::new(engine)));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
