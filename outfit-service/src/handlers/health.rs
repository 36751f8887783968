use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "outfit-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Ready once the text provider accepts our credentials.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.text_provider.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Text provider not ready");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}
