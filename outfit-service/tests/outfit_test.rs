mod common;

use axum::http::{header, Method, StatusCode};
use common::{test_config, TestApp, FULL_QUERY};
use outfit_service::services::providers::mock::MockTextProvider;
use outfit_service::services::PromptStyle;

#[tokio::test]
async fn returns_suggestions_and_html_for_markdown_style() {
    let app = TestApp::new(
        MockTextProvider::replying("## Cozy layers\n- Chunky knit sweater\n- Wool coat"),
        PromptStyle::Markdown,
    );

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["suggestions"],
        "## Cozy layers\n- Chunky knit sweater\n- Wool coat"
    );
    let html = response.body["html"].as_str().expect("html missing");
    assert!(html.contains("<h2>Cozy layers</h2>"));
    assert!(html.contains("<li>Chunky knit sweater</li>"));
}

#[tokio::test]
async fn issues_exactly_one_call_with_all_values_in_prompt() {
    let app = TestApp::new(MockTextProvider::replying("Wear boots."), PromptStyle::Markdown);

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.provider.call_count(), 1);
    let prompt = &app.provider.prompts()[0];
    for value in ["blue jeans", "casual", "cold", "winter"] {
        assert!(prompt.contains(value), "prompt is missing {value}");
    }
    assert_eq!(app.provider.params()[0], PromptStyle::Markdown.sampling());
}

#[tokio::test]
async fn structured_style_returns_text_only() {
    let app = TestApp::new(
        MockTextProvider::replying("STYLING THE MAIN PIECE:\nCuff the jeans."),
        PromptStyle::Structured,
    );

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({ "suggestions": "STYLING THE MAIN PIECE:\nCuff the jeans." })
    );
    assert_eq!(app.provider.params()[0], PromptStyle::Structured.sampling());
    assert!(app.provider.prompts()[0].contains("STYLING TIPS:"));
}

#[tokio::test]
async fn empty_completion_is_a_valid_result() {
    let app = TestApp::new(MockTextProvider::replying(""), PromptStyle::Markdown);

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["suggestions"], "");
    assert_eq!(response.body["html"], "");
}

#[tokio::test]
async fn each_missing_parameter_is_rejected_without_calling_provider() {
    let queries = [
        ("expression=casual&temperature=cold&season=winter", "item"),
        ("item=jeans&temperature=cold&season=winter", "expression"),
        ("item=jeans&expression=casual&season=winter", "temperature"),
        ("item=jeans&expression=casual&temperature=cold", "season"),
        ("item=&expression=casual&temperature=cold&season=winter", "item"),
    ];

    for (query, missing) in queries {
        let app = TestApp::new(MockTextProvider::replying("unused"), PromptStyle::Markdown);

        let response = app.get(&format!("/getOutfitSuggestions?{query}")).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "query: {query}");
        let error = response.body["error"].as_str().expect("error missing");
        assert!(error.contains(missing), "{error} should name {missing}");
        assert_eq!(app.provider.call_count(), 0);
    }
}

#[tokio::test]
async fn no_parameters_names_all_four() {
    let app = TestApp::new(MockTextProvider::replying("unused"), PromptStyle::Markdown);

    let response = app.get("/getOutfitSuggestions").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Missing required parameters: expression, item, season, temperature"
    );
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn duplicate_parameter_is_json_bad_request() {
    let app = TestApp::new(MockTextProvider::replying("unused"), PromptStyle::Markdown);

    let response = app
        .get("/getOutfitSuggestions?item=a&item=b&expression=c&temperature=d&season=e")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"]
        .as_str()
        .expect("error body should be JSON")
        .contains("duplicate field `item`"));
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_returns_500_with_details_in_dev() {
    let app = TestApp::new(
        MockTextProvider::failing("quota exceeded"),
        PromptStyle::Markdown,
    );

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Error generating outfit suggestions");
    assert!(response.body["details"]
        .as_str()
        .unwrap()
        .contains("quota exceeded"));
    assert_eq!(response.body["project"], "fashion-hack-test");
    assert_eq!(response.body["location"], "us-central1");
    assert!(response.body.get("suggestions").is_none());
    assert_eq!(app.provider.call_count(), 1);
}

#[tokio::test]
async fn provider_failure_hides_details_in_prod() {
    let app = TestApp::with_config(
        MockTextProvider::failing("quota exceeded"),
        test_config(PromptStyle::Markdown, "prod"),
    );

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": "Error generating outfit suggestions" })
    );
}

#[tokio::test]
async fn preflight_returns_204_with_cors_headers() {
    let app = TestApp::new(MockTextProvider::replying("unused"), PromptStyle::Markdown);

    let response = app
        .request(Method::OPTIONS, "/getOutfitSuggestions?item=ignored")
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.raw.is_empty());
    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, OPTIONS"
    );
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type"
    );
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn responses_carry_cors_and_request_id() {
    let app = TestApp::new(MockTextProvider::replying("ok"), PromptStyle::Markdown);

    let response = app.get(FULL_QUERY).await;

    assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(response.headers.contains_key("x-request-id"));
    assert_eq!(response.headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}
