use climate_server::config::ServerConfig;
use climate_server::store::ClimateStore;
use climate_server::web::{API_ROUTES, AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,climate_server=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = ServerConfig::from_env()?;

    info!(url = %config.database_url, "opening climate database");
    let store = ClimateStore::connect(&config).await?;

    // The reporting window is fixed for the life of the process.
    let state = AppState::load(store.clone()).await?;
    match &state.window {
        Some(window) => info!(%window, "last 12 months window"),
        None => warn!("measurement table is empty; 12-month routes will return no rows"),
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Climate API listening on http://{}", config.bind_addr);
    for route in API_ROUTES {
        info!("  GET  {:<28} - {}", route.pattern, route.description);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("shut down");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
