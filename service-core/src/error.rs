use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    /// A call to an external provider failed. `details` and `context` are only
    /// rendered when the service runs with verbose errors.
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        details: Option<String>,
        context: Map<String, Value>,
    },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Service Unavailable")]
    ServiceUnavailable,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    /// Upstream failure with only the generic message exposed.
    pub fn upstream(message: impl Into<String>) -> Self {
        AppError::Upstream {
            message: message.into(),
            details: None,
            context: Map::new(),
        }
    }

    /// Upstream failure carrying the provider error text and deployment context.
    pub fn upstream_verbose(
        message: impl Into<String>,
        details: impl Into<String>,
        context: Map<String, Value>,
    ) -> Self {
        AppError::Upstream {
            message: message.into(),
            details: Some(details.into()),
            context,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. }
            | AppError::InternalError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Lists the offending query fields, sorted so messages are stable.
fn invalid_fields(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    fields.join(", ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
            #[serde(flatten)]
            context: Map<String, Value>,
        }

        let status = self.status_code();
        let (error_message, details, context) = match self {
            AppError::ValidationError(err) => (
                format!("Missing required parameters: {}", invalid_fields(&err)),
                None,
                Map::new(),
            ),
            AppError::BadRequest(err) => (err.to_string(), None, Map::new()),
            AppError::Upstream {
                message,
                details,
                context,
            } => (message, details, context),
            AppError::InternalError(_) => ("Internal server error".to_string(), None, Map::new()),
            AppError::ServiceUnavailable => ("Service unavailable".to_string(), None, Map::new()),
            AppError::ConfigError(_) => ("Configuration error".to_string(), None, Map::new()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
                context,
            }),
        )
            .into_response()
    }
}
