use crate::config::WebConfig;
use crate::handlers::health_check;
use axum::{http::header, http::HeaderValue, middleware::from_fn, routing::get, Router};
use service_core::middleware::{
    make_request_span, request_id_middleware, security_headers_middleware,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const BOOTSTRAP_SCRIPT: &str = "flutter_bootstrap.js";

/// Serves the client from `web_root`. Unknown paths fall back to
/// `index.html` so client-side routes survive a reload. The bootstrap script
/// is never cached, since it names the bundle to load.
pub fn build_router(web_root: &Path) -> Router {
    let index = web_root.join("index.html");

    let bootstrap = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .service(ServeFile::new(web_root.join(BOOTSTRAP_SCRIPT)));

    Router::new()
        .route("/health", get(health_check))
        .route_service(&format!("/{}", BOOTSTRAP_SCRIPT), bootstrap)
        .fallback_service(ServeDir::new(web_root).fallback(ServeFile::new(index)))
        .layer(CompressionLayer::new())
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| make_request_span(request)),
        )
        .layer(from_fn(request_id_middleware))
}

pub fn router_from_config(config: &WebConfig) -> Router {
    tracing::info!(web_root = %config.web_root.display(), "Serving static client");
    build_router(&config.web_root)
}
