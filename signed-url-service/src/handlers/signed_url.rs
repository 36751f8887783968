use crate::models::{SignedUrlQuery, SignedUrlRequest, SignedUrlResponse};
use crate::services::SIGNED_URL_TTL;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::Map;
use service_core::error::AppError;
use service_core::extract::QueryParams;

const SIGNING_FAILED: &str = "Error generating signed URL";

pub async fn get_signed_url(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SignedUrlQuery>,
) -> Result<Json<SignedUrlResponse>, AppError> {
    let request = SignedUrlRequest::try_from(query)?;

    tracing::debug!(
        bucket = %request.bucket,
        object = %request.object,
        "Signing read URL"
    );

    let signed = state
        .signer
        .sign_read_url(&request, SIGNED_URL_TTL)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %request.bucket,
                object = %request.object,
                "Error generating signed URL"
            );
            if state.config.common.verbose_errors() {
                AppError::upstream_verbose(SIGNING_FAILED, e.to_string(), Map::new())
            } else {
                AppError::upstream(SIGNING_FAILED)
            }
        })?;

    tracing::info!(
        bucket = %request.bucket,
        expires_at = %signed.expires_at,
        "Issued signed URL"
    );

    Ok(Json(SignedUrlResponse {
        signed_url: signed.url,
    }))
}
