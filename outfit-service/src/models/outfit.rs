use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// Raw query string of `GET /getOutfitSuggestions`.
///
/// Every field is optional at the extractor level so a missing parameter is
/// reported as a 400 with the field name rather than a generic rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OutfitQuery {
    #[validate(required, length(min = 1))]
    pub item: Option<String>,
    #[validate(required, length(min = 1))]
    pub expression: Option<String>,
    #[validate(required, length(min = 1))]
    pub temperature: Option<String>,
    #[validate(required, length(min = 1))]
    pub season: Option<String>,
}

/// Validated outfit request. All four values are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitRequest {
    pub item: String,
    pub expression: String,
    pub temperature: String,
    pub season: String,
}

impl TryFrom<OutfitQuery> for OutfitRequest {
    type Error = AppError;

    fn try_from(query: OutfitQuery) -> Result<Self, Self::Error> {
        query.validate()?;

        match (query.item, query.expression, query.temperature, query.season) {
            (Some(item), Some(expression), Some(temperature), Some(season)) => Ok(Self {
                item,
                expression,
                temperature,
                season,
            }),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(
                "Missing required parameters"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OutfitResponse {
    pub suggestions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_query() -> OutfitQuery {
        OutfitQuery {
            item: Some("blue jeans".into()),
            expression: Some("casual".into()),
            temperature: Some("cold".into()),
            season: Some("winter".into()),
        }
    }

    #[test]
    fn complete_query_converts() {
        let request = OutfitRequest::try_from(full_query()).unwrap();
        assert_eq!(request.item, "blue jeans");
        assert_eq!(request.season, "winter");
    }

    #[test]
    fn missing_field_is_rejected() {
        let query = OutfitQuery {
            season: None,
            ..full_query()
        };
        let err = OutfitRequest::try_from(query).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn empty_field_is_rejected() {
        let query = OutfitQuery {
            expression: Some(String::new()),
            ..full_query()
        };
        assert!(OutfitRequest::try_from(query).is_err());
    }

    #[test]
    fn html_is_omitted_when_absent() {
        let body = serde_json::to_value(OutfitResponse {
            suggestions: "wear a coat".into(),
            html: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "suggestions": "wear a coat" }));
    }
}
