//! CORS handling shared by the public endpoints.
//!
//! One origin policy is applied to every response, and preflight `OPTIONS`
//! requests are answered with `204 No Content` and an empty body.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_origin: HeaderValue,
    allow_methods: HeaderValue,
    allow_headers: HeaderValue,
}

impl CorsPolicy {
    pub fn new(origin: &str) -> Self {
        let allow_origin = HeaderValue::from_str(origin).unwrap_or_else(|e| {
            tracing::error!("Invalid CORS origin '{}': {}. Using fallback.", origin, e);
            HeaderValue::from_static("*")
        });

        Self {
            allow_origin,
            allow_methods: HeaderValue::from_static("GET, OPTIONS"),
            allow_headers: HeaderValue::from_static("Content-Type"),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.cors_allowed_origin)
    }

    pub fn allow_origin(&self) -> &HeaderValue {
        &self.allow_origin
    }

    fn apply(&self, response: &mut Response) {
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.allow_origin.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.allow_methods.clone(),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.allow_headers.clone(),
        );
        if self.allow_origin != "*" {
            headers.append(header::VARY, HeaderValue::from_static("Origin"));
        }
    }
}

pub async fn cors_middleware(
    State(policy): State<CorsPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;
    policy.apply(&mut response);
    response
}

/// Preflight handler. Query parameters are never inspected.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body, http::Request as HttpRequest, middleware::from_fn_with_state, routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app(policy: CorsPolicy) -> Router {
        Router::new()
            .route("/thing", get(|| async { "ok" }).options(preflight))
            .layer(from_fn_with_state(policy, cors_middleware))
    }

    #[tokio::test]
    async fn preflight_returns_no_content_with_headers() {
        let response = app(CorsPolicy::new("*"))
            .oneshot(
                HttpRequest::builder()
                    .method("OPTIONS")
                    .uri("/thing?anything=goes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert!(headers.get(header::VARY).is_none());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn fixed_origin_is_applied_to_regular_responses() {
        let response = app(CorsPolicy::new("https://stylist.example.com"))
            .oneshot(HttpRequest::builder().uri("/thing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://stylist.example.com"
        );
        assert_eq!(response.headers()[header::VARY], "Origin");
    }

    #[test]
    fn invalid_origin_falls_back_to_wildcard() {
        let policy = CorsPolicy::new("bad\norigin");
        assert_eq!(policy.allow_origin(), "*");
    }
}
