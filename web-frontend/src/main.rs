use service_core::observability::{init_tracing, otlp_endpoint_from_env};
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use tracing::info;
use web_frontend::config::WebConfig;
use web_frontend::startup::router_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let otlp_endpoint = otlp_endpoint_from_env();
    init_tracing("web-frontend", "info", otlp_endpoint.as_deref());

    let config = WebConfig::load().map_err(|e| {
        tracing::error!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = router_from_config(&config);

    let address = SocketAddr::from(([0, 0, 0, 0], config.common.port));
    let listener = tokio::net::TcpListener::bind(address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting web-frontend on {}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            anyhow::anyhow!("Server error: {}", e)
        })?;

    Ok(())
}
