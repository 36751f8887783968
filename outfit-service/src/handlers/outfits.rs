use crate::models::{OutfitQuery, OutfitRequest, OutfitResponse};
use crate::services::markdown;
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{Map, Value};
use service_core::error::AppError;
use service_core::extract::QueryParams;

const GENERATION_FAILED: &str = "Error generating outfit suggestions";

pub async fn get_outfit_suggestions(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<OutfitQuery>,
) -> Result<Json<OutfitResponse>, AppError> {
    let request = OutfitRequest::try_from(query)?;
    let style = state.config.prompt_style;

    let prompt = style.build_prompt(&request);
    tracing::debug!(prompt = %prompt, "Built outfit prompt");

    tracing::info!(
        model = %state.text_provider.model(),
        style = %style,
        project = %state.config.deployment.project,
        location = %state.config.deployment.location,
        "Requesting outfit suggestions"
    );

    let response = state
        .text_provider
        .generate(&prompt, &style.sampling())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error generating outfit suggestions");
            generation_error(&state, e)
        })?;

    tracing::info!(
        output_tokens = response.output_tokens,
        suggestion_len = response.text.len(),
        "Received outfit suggestions"
    );

    let html = style
        .renders_html()
        .then(|| markdown::render_html(&response.text));

    Ok(Json(OutfitResponse {
        suggestions: response.text,
        html,
    }))
}

fn generation_error(state: &AppState, error: ProviderError) -> AppError {
    if !state.config.common.verbose_errors() {
        return AppError::upstream(GENERATION_FAILED);
    }

    let mut context = Map::new();
    context.insert(
        "project".to_string(),
        Value::from(state.config.deployment.project.clone()),
    );
    context.insert(
        "location".to_string(),
        Value::from(state.config.deployment.location.clone()),
    );

    AppError::upstream_verbose(GENERATION_FAILED, error.to_string(), context)
}
