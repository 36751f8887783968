use crate::config::SignedUrlConfig;
use crate::handlers;
use crate::services::signer::gcs::{GcsHmacConfig, GcsHmacSigner};
use crate::services::UrlSigner;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors_middleware, make_request_span, preflight, request_id_middleware,
    security_headers_middleware, CorsPolicy,
};
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: SignedUrlConfig,
    pub signer: Arc<dyn UrlSigner>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsPolicy::from_config(&state.config.common);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/getSignedUrl",
            get(handlers::get_signed_url).options(preflight),
        )
        .layer(from_fn_with_state(cors, cors_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| make_request_span(request)),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: SignedUrlConfig) -> Result<Self, AppError> {
        let signer: Arc<dyn UrlSigner> = Arc::new(
            GcsHmacSigner::new(GcsHmacConfig {
                access_id: config.storage.access_id.clone(),
                secret: config.storage.secret.clone(),
                endpoint: config.storage.endpoint.clone(),
            })
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?,
        );

        tracing::info!(endpoint = %config.storage.endpoint, "Initialized presigning URL signer");

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let router = build_router(AppState { config, signer });

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
