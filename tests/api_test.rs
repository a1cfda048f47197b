//! Handler-level tests for the HTTP endpoints, driven through the router
//! with a stub backend

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use outfit_gateway::api::routes::create_router;
use outfit_gateway::backend::failure::GenerationFailure;
use outfit_gateway::backend::traits::{GeneratedImage, GenerationBackend, GenerationRequest};
use outfit_gateway::config::Settings;
use outfit_gateway::AppState;

/// Backend returning a canned result, so handler behavior can be tested
/// without a network.
struct StubBackend {
    configured: bool,
    response: Result<String, GenerationFailure>,
}

impl StubBackend {
    fn succeeding() -> Self {
        Self {
            configured: true,
            response: Ok("data:image/png;base64,stub".to_string()),
        }
    }

    fn failing(failure: GenerationFailure) -> Self {
        Self {
            configured: true,
            response: Err(failure),
        }
    }

    fn unconfigured() -> Self {
        Self {
            configured: false,
            response: Ok(String::new()),
        }
    }
}

#[async_trait]
impl GenerationBackend for StubBackend {
    fn name(&self) -> &str {
        "stub"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GeneratedImage, GenerationFailure> {
        self.response
            .clone()
            .map(|image_url| GeneratedImage { image_url })
    }
}

fn app(stub: StubBackend) -> Router {
    let state = Arc::new(AppState::with_backend(Settings::default(), Arc::new(stub)));
    create_router(state)
}

fn batch_body() -> String {
    json!({
        "base64": "SGVsbG8sIFdvcmxkIQ==",
        "mimeType": "image/png",
        "userProfile": {
            "preferredStyles": ["boho"],
            "favoriteColors": "teal",
            "disliked": "neon"
        },
        "styles": ["casual", "formal"]
    })
    .to_string()
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_outfits_happy_path() {
    let response = app(StubBackend::succeeding())
        .oneshot(post("/generate-outfits", batch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let outfits = body["outfits"].as_array().unwrap();
    assert_eq!(outfits.len(), 2);
    for outfit in outfits {
        assert_eq!(outfit["imageUrl"], "data:image/png;base64,stub");
        assert!(outfit.get("error").is_none());
    }
}

#[tokio::test]
async fn test_generate_outfits_all_failed_is_still_200() {
    let response = app(StubBackend::failing(GenerationFailure::rate_limited()))
        .oneshot(post("/generate-outfits", batch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let outfits = body["outfits"].as_array().unwrap();
    assert_eq!(outfits.len(), 2);
    for outfit in outfits {
        assert_eq!(outfit["kind"], "rate_limited");
        assert!(outfit["error"].as_str().unwrap().contains("Rate limit"));
        assert!(outfit.get("imageUrl").is_none());
    }
}

#[tokio::test]
async fn test_generate_outfits_malformed_body() {
    let response = app(StubBackend::succeeding())
        .oneshot(post("/generate-outfits", "{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid request"));
}

#[tokio::test]
async fn test_generate_outfits_invalid_base64() {
    let body = json!({
        "base64": "not base64!!!",
        "mimeType": "image/png",
        "styles": ["casual"]
    })
    .to_string();

    let response = app(StubBackend::succeeding())
        .oneshot(post("/generate-outfits", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("base64"));
}

#[tokio::test]
async fn test_generate_outfits_missing_credential() {
    let response = app(StubBackend::unconfigured())
        .oneshot(post("/generate-outfits", batch_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("API key"));
}

#[tokio::test]
async fn test_edit_outfit_happy_path() {
    let body = json!({
        "base64": "SGVsbG8sIFdvcmxkIQ==",
        "mimeType": "image/png",
        "prompt": "swap the shoes for boots"
    })
    .to_string();

    let response = app(StubBackend::succeeding())
        .oneshot(post("/edit-outfit", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["imageUrl"], "data:image/png;base64,stub");
}

#[tokio::test]
async fn test_edit_outfit_failure_statuses() {
    let cases = [
        (GenerationFailure::rate_limited(), StatusCode::TOO_MANY_REQUESTS),
        (GenerationFailure::quota_exhausted(), StatusCode::PAYMENT_REQUIRED),
        (
            GenerationFailure::generic("backend exploded"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (failure, expected_status) in cases {
        let body = json!({
            "base64": "SGVsbG8sIFdvcmxkIQ==",
            "mimeType": "image/png",
            "prompt": "make it brighter"
        })
        .to_string();

        let response = app(StubBackend::failing(failure))
            .oneshot(post("/edit-outfit", body))
            .await
            .unwrap();

        assert_eq!(response.status(), expected_status);
        let body = response_json(response).await;
        assert!(body["error"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_preflight_gets_permissive_cors() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate-outfits")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(StubBackend::succeeding())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    let response = app(StubBackend::succeeding())
        .oneshot(post("/generate-outfits", batch_body()))
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app(StubBackend::succeeding())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
