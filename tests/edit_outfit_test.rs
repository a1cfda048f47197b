//! Integration tests for the single-image editor against a mock backend

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use outfit_gateway::backend::ai_gateway::AiGatewayBackend;
use outfit_gateway::backend::failure::FailureKind;
use outfit_gateway::config::BackendConfig;
use outfit_gateway::error::AppError;
use outfit_gateway::outfit::editor::OutfitEditor;
use outfit_gateway::outfit::ImagePayload;

fn editor(server: &MockServer, api_key: Option<&str>) -> OutfitEditor {
    let config = BackendConfig {
        url: format!("{}/v1/chat/completions", server.uri()),
        model: "google/gemini-2.5-flash-image".to_string(),
        api_key: api_key.map(String::from),
        timeout_ms: 5000,
        max_concurrent: 4,
    };
    OutfitEditor::new(Arc::new(AiGatewayBackend::new(&config).unwrap()))
}

fn outfit_image() -> ImagePayload {
    ImagePayload::new("SGVsbG8sIFdvcmxkIQ==".to_string(), "image/png".to_string()).unwrap()
}

#[tokio::test]
async fn test_edit_returns_image_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("swap the shoes for boots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "images": [{ "image_url": { "url": "data:image/png;base64,edited" } }]
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let image_url = editor(&server, Some("test-key"))
        .edit(&outfit_image(), "swap the shoes for boots")
        .await
        .unwrap();

    assert_eq!(image_url, "data:image/png;base64,edited");
}

#[tokio::test]
async fn test_edit_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = editor(&server, Some("test-key"))
        .edit(&outfit_image(), "make it brighter")
        .await
        .unwrap_err();

    match err {
        AppError::Generation(failure) => assert_eq!(failure.kind, FailureKind::RateLimited),
        other => panic!("expected a generation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_edit_quota_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(402))
        .mount(&server)
        .await;

    let err = editor(&server, Some("test-key"))
        .edit(&outfit_image(), "make it brighter")
        .await
        .unwrap_err();

    match err {
        AppError::Generation(failure) => assert_eq!(failure.kind, FailureKind::QuotaExhausted),
        other => panic!("expected a generation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_edit_success_without_image_is_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "choices": [{ "message": { "content": "no image" } }] })),
        )
        .mount(&server)
        .await;

    let err = editor(&server, Some("test-key"))
        .edit(&outfit_image(), "make it brighter")
        .await
        .unwrap_err();

    match err {
        AppError::Generation(failure) => {
            assert_eq!(failure.kind, FailureKind::Generic);
            assert!(failure.message.contains("No image"));
        }
        other => panic!("expected a generation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_edit_missing_credential_issues_no_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = editor(&server, None)
        .edit(&outfit_image(), "make it brighter")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::MissingCredential));
}
