use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// Raw query string of `GET /getSignedUrl`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SignedUrlQuery {
    #[validate(required, length(min = 1))]
    pub bucket: Option<String>,
    #[validate(required, length(min = 1))]
    pub filename: Option<String>,
}

/// Object to sign a read URL for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrlRequest {
    pub bucket: String,
    pub object: String,
}

impl TryFrom<SignedUrlQuery> for SignedUrlRequest {
    type Error = AppError;

    fn try_from(query: SignedUrlQuery) -> Result<Self, Self::Error> {
        query.validate()?;

        match (query.bucket, query.filename) {
            (Some(bucket), Some(object)) => Ok(Self { bucket, object }),
            _ => Err(AppError::BadRequest(anyhow::anyhow!(
                "Missing bucket or filename parameter"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlResponse {
    pub signed_url: String,
}
