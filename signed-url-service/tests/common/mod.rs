#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use signed_url_service::config::{SignedUrlConfig, StorageSettings};
use signed_url_service::services::UrlSigner;
use signed_url_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub raw: Vec<u8>,
    pub body: serde_json::Value,
}

pub fn test_config(environment: &str) -> SignedUrlConfig {
    SignedUrlConfig {
        common: CoreConfig {
            port: 0,
            environment: environment.to_string(),
            ..CoreConfig::default()
        },
        storage: StorageSettings {
            access_id: "GOOG1EXAMPLEACCESSID".to_string(),
            secret: Secret::new("test-secret".to_string()),
            endpoint: "https://storage.googleapis.com".to_string(),
        },
    }
}

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(signer: Arc<dyn UrlSigner>) -> Self {
        Self::with_config(signer, test_config("dev"))
    }

    pub fn with_config(signer: Arc<dyn UrlSigner>, config: SignedUrlConfig) -> Self {
        Self {
            router: build_router(AppState { config, signer }),
        }
    }

    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body = serde_json::from_slice(&raw).unwrap_or(serde_json::Value::Null);

        TestResponse {
            status,
            headers,
            raw,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri).await
    }
}

/// Returns the value of `name` in the URL's query string.
pub fn query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}
