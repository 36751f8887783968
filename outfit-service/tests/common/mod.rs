#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use outfit_service::config::{DeploymentSettings, GeminiSettings, OutfitConfig};
use outfit_service::services::providers::mock::MockTextProvider;
use outfit_service::services::providers::TextProvider;
use outfit_service::services::PromptStyle;
use outfit_service::startup::{build_router, AppState};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const FULL_QUERY: &str =
    "/getOutfitSuggestions?item=blue%20jeans&expression=casual&temperature=cold&season=winter";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub raw: Vec<u8>,
    pub body: serde_json::Value,
}

pub struct TestApp {
    router: Router,
    pub provider: Arc<MockTextProvider>,
}

pub fn test_config(style: PromptStyle, environment: &str) -> OutfitConfig {
    OutfitConfig {
        common: CoreConfig {
            port: 0,
            environment: environment.to_string(),
            ..CoreConfig::default()
        },
        gemini: GeminiSettings {
            api_key: Secret::new("test-api-key".to_string()),
            model: "gemini-pro".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(1),
        },
        deployment: DeploymentSettings {
            project: "fashion-hack-test".to_string(),
            location: "us-central1".to_string(),
        },
        prompt_style: style,
    }
}

impl TestApp {
    pub fn new(provider: MockTextProvider, style: PromptStyle) -> Self {
        Self::with_config(provider, test_config(style, "dev"))
    }

    pub fn with_config(provider: MockTextProvider, config: OutfitConfig) -> Self {
        let provider = Arc::new(provider);
        let text_provider: Arc<dyn TextProvider> = provider.clone();
        let router = build_router(AppState {
            config,
            text_provider,
        });

        Self { router, provider }
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
