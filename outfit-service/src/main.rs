use outfit_service::config::OutfitConfig;
use outfit_service::startup::Application;
use service_core::observability::{init_tracing, otlp_endpoint_from_env};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let otlp_endpoint = otlp_endpoint_from_env();
    init_tracing("outfit-service", "info", otlp_endpoint.as_deref());

    let config = OutfitConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await?;

    tracing::info!("Outfit service shut down gracefully");
    Ok(())
}
