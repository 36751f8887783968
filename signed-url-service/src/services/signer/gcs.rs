//! Cloud Storage signed URLs through the S3 interoperability API.
//!
//! Cloud Storage accepts SigV4 presigned URLs signed with an HMAC key when
//! they are addressed path-style to `storage.googleapis.com` with region
//! `auto`. Signing is local: no network call is made and object existence is
//! not checked.

use super::{SignedUrl, SigningError, UrlSigner, MAX_SIGNED_URL_TTL};
use crate::models::SignedUrlRequest;
use async_trait::async_trait;
use aws_sdk_s3::config::{
    Builder as S3Builder, Credentials, Region, RequestChecksumCalculation,
    ResponseChecksumValidation,
};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use std::time::{Duration, SystemTime};

pub const GCS_DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";

const GCS_REGION: &str = "auto";

#[derive(Debug, Clone)]
pub struct GcsHmacConfig {
    pub access_id: String,
    pub secret: Secret<String>,
    pub endpoint: String,
}

pub struct GcsHmacSigner {
    client: Client,
}

impl GcsHmacSigner {
    pub fn new(config: GcsHmacConfig) -> Result<Self, SigningError> {
        if config.access_id.is_empty() || config.secret.expose_secret().is_empty() {
            return Err(SigningError::NotConfigured(
                "HMAC access id and secret are required".to_string(),
            ));
        }

        let creds = Credentials::new(
            &config.access_id,
            config.secret.expose_secret(),
            None,
            None,
            "gcs-hmac",
        );

        // Checksum headers would become signed headers a browser never sends.
        let s3_config = S3Builder::new()
            .endpoint_url(&config.endpoint)
            .credentials_provider(creds)
            .region(Region::new(GCS_REGION))
            .force_path_style(true)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
        })
    }

    /// Signs as of `now`. Kept separate from the trait method so URLs are
    /// reproducible in tests.
    pub async fn sign_at(
        &self,
        request: &SignedUrlRequest,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<SignedUrl, SigningError> {
        let expires = ttl.as_secs();
        if expires == 0 || ttl > MAX_SIGNED_URL_TTL {
            return Err(SigningError::InvalidExpiry(expires));
        }

        let presigning = PresigningConfig::builder()
            .start_time(SystemTime::from(now))
            .expires_in(ttl)
            .build()
            .map_err(|e| SigningError::Provider(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&request.bucket)
            .key(&request.object)
            .presigned(presigning)
            .await
            .map_err(|e| SigningError::Provider(e.to_string()))?;

        Ok(SignedUrl {
            url: presigned.uri().to_string(),
            expires_at: now + chrono::Duration::seconds(expires as i64),
        })
    }
}

#[async_trait]
impl UrlSigner for GcsHmacSigner {
    async fn sign_read_url(
        &self,
        request: &SignedUrlRequest,
        ttl: Duration,
    ) -> Result<SignedUrl, SigningError> {
        self.sign_at(request, ttl, Utc::now()).await
    }
}
