pub mod logging;

pub use logging::init_tracing;

/// Reads the optional OTLP collector endpoint from `OTLP_ENDPOINT`.
pub fn otlp_endpoint_from_env() -> Option<String> {
    std::env::var("OTLP_ENDPOINT")
        .ok()
        .filter(|endpoint| !endpoint.is_empty())
}
