use service_core::observability::{init_tracing, otlp_endpoint_from_env};
use signed_url_service::config::SignedUrlConfig;
use signed_url_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let otlp_endpoint = otlp_endpoint_from_env();
    init_tracing("signed-url-service", "info", otlp_endpoint.as_deref());

    let config = SignedUrlConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await?;

    tracing::info!("Signed URL service shut down gracefully");
    Ok(())
}
