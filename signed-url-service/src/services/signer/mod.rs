//! URL signing abstractions and implementations.

pub mod gcs;
pub mod mock;

use crate::models::SignedUrlRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

/// Validity window of every URL handed out by the service.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// Longest expiry a SigV4 presigned URL accepts (7 days).
pub const MAX_SIGNED_URL_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Signer not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid expiry: {0}s (must be between 1 and 604800 seconds)")]
    InvalidExpiry(u64),

    #[error("Signing failed: {0}")]
    Provider(String),
}

/// A signed read URL and the instant it stops working.
#[derive(Debug, Clone)]
pub struct SignedUrl {
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// Produce a read-only URL for the object, valid for `ttl`.
    async fn sign_read_url(
        &self,
        request: &SignedUrlRequest,
        ttl: Duration,
    ) -> Result<SignedUrl, SigningError>;
}
