use axum::http::Method;
use serde_json::json;

use test_automation_generator::form::form_state::FormState;
use test_automation_generator::service::backend::{GenerationBackend, HttpBackend};
use test_automation_generator::service::error::GenerateError;
use test_automation_generator::service::service_model::ServiceConfig;
use test_automation_generator::submission::controller::SubmissionController;
use test_automation_generator::submission::submission_model::{ExtractedLocator, SubmissionStatus};

use crate::common::mock_server::{MockServer, direct_client};

mod common;

fn backend_for(base_url: &str) -> HttpBackend {
    HttpBackend::with_client(&ServiceConfig::new(base_url), direct_client())
}

// =========================================================================
// POST /generate
// =========================================================================

#[tokio::test]
async fn generate_posts_form_and_normalizes_reply() {
    let server = MockServer::start(
        200,
        r#"{"generated_code":"print(1)","extracted_xpaths":[{"variable_name":"loginBtn","xpath":"//button[@id='login']"}]}"#,
    )
    .await;
    let mut controller = SubmissionController::new(backend_for(&server.base_url));

    let mut form = FormState::new();
    form.update("selectedLanguage", "Python");
    form.update("selectedTool", "Playwright");
    form.update("url", "https://example.com");

    let status = controller.submit_and_wait(&form).await;

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(controller.generated_code(), "print(1)");
    assert_eq!(
        controller.locators(),
        &[ExtractedLocator::new("loginBtn", "//button[@id='login']")]
    );

    let request = server.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/generate");
    assert!(request
        .header("content-type")
        .is_some_and(|v| v.starts_with("application/json")));
    assert!(request.header("authorization").is_none());

    let body = request.body;
    assert_eq!(body.as_object().map(|o| o.len()), Some(7));
    assert_eq!(
        body,
        json!({
            "url": "https://example.com",
            "html": "",
            "testCase": "",
            "testData": "",
            "testSteps": "",
            "selectedLanguage": "Python",
            "selectedTool": "Playwright",
        })
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start(200, r#"{"result":"ok"}"#).await;
    let backend = backend_for(&format!("{}/", server.base_url));

    let body = backend.generate(FormState::new().snapshot()).await.unwrap();

    assert_eq!(body, json!({"result": "ok"}));
    assert_eq!(server.last_request().path, "/generate");
}

#[tokio::test]
async fn server_error_status_and_body_reach_the_message() {
    let server = MockServer::start(500, "db down").await;
    let mut controller = SubmissionController::new(backend_for(&server.base_url));

    let status = controller.submit_and_wait(&FormState::new()).await;

    let SubmissionStatus::Error(message) = status else {
        panic!("expected Error, got {:?}", status);
    };
    assert!(message.contains("500"), "message: {}", message);
    assert!(message.contains("db down"), "message: {}", message);
}

#[tokio::test]
async fn non_json_success_body_is_a_malformed_response() {
    let server = MockServer::start(200, "<html>not json</html>").await;
    let backend = backend_for(&server.base_url);

    let err = backend.generate(FormState::new().snapshot()).await.unwrap_err();

    assert!(matches!(err, GenerateError::MalformedResponse(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let backend = backend_for(&format!("http://127.0.0.1:{}", port));

    let err = backend.generate(FormState::new().snapshot()).await.unwrap_err();

    assert!(matches!(err, GenerateError::Network(_)));
    assert!(err.is_transport());

    let mut controller = SubmissionController::new(backend);
    let status = controller.submit_and_wait(&FormState::new()).await;
    assert!(matches!(status, SubmissionStatus::Error(ref m) if m.starts_with("Network error")));
}

#[tokio::test]
async fn status_error_exposes_code() {
    let server = MockServer::start(503, "busy").await;
    let backend = backend_for(&server.base_url);

    let err = backend.generate(FormState::new().snapshot()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.to_string(), "Server error: 503 busy");
}

// =========================================================================
// GET /health
// =========================================================================

#[tokio::test]
async fn health_decodes_service_status() {
    let server =
        MockServer::start(200, r#"{"status":"ok","lang_app_available":false}"#).await;
    let backend = backend_for(&server.base_url);

    let health = backend.health().await.unwrap();

    assert!(health.is_ok());
    assert!(!health.lang_app_available);
    let request = server.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/health");
}

#[tokio::test]
async fn health_reports_error_status() {
    let server = MockServer::start(404, "not found").await;
    let backend = backend_for(&server.base_url);

    let err = backend.health().await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
}

// =========================================================================
// Observation against a live service
// =========================================================================

#[tokio::test]
async fn subscriber_sees_live_reply_without_settle() {
    let server = MockServer::start(200, r#"{"result_text":"def test(): pass"}"#).await;
    let mut controller = SubmissionController::new(backend_for(&server.base_url));
    let mut rx = controller.subscribe();

    controller.submit(&FormState::new());
    let view = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        rx.wait_for(|view| !view.status.is_loading()),
    )
    .await
    .expect("reply published")
    .expect("controller alive")
    .clone();

    assert_eq!(view.status, SubmissionStatus::Success);
    assert_eq!(view.code, "def test(): pass");
    assert_eq!(server.requests().len(), 1);
}
