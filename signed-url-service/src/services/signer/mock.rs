//! Mock signer for testing.

use super::{SignedUrl, SigningError, UrlSigner};
use crate::models::SignedUrlRequest;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub struct MockUrlSigner {
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockUrlSigner {
    /// Returns `https://signed.test/{bucket}/{object}?expires={secs}`.
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UrlSigner for MockUrlSigner {
    async fn sign_read_url(
        &self,
        request: &SignedUrlRequest,
        ttl: Duration,
    ) -> Result<SignedUrl, SigningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(SigningError::Provider(message.clone()));
        }

        Ok(SignedUrl {
            url: format!(
                "https://signed.test/{}/{}?expires={}",
                request.bucket,
                request.object,
                ttl.as_secs()
            ),
            expires_at: Utc::now() + chrono::Duration::seconds(ttl.as_secs() as i64),
        })
    }
}
