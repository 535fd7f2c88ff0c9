use std::sync::Arc;

use api::{core::app_state::AppState, router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use faq_rag::{FaqAssistant, FaqConfig, FixedPicker};
use form_store::SubmissionStore;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app(dir: &std::path::Path) -> Router {
    let mut config = FaqConfig::default();
    config.corpus.path = dir.join("website_content.txt");
    let assistant = FaqAssistant::from_config(config, Arc::new(FixedPicker(0)))
        .await
        .unwrap();
    router(Arc::new(AppState::new(assistant, SubmissionStore::new(dir))))
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let res = app(dir.path())
        .await
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap(), json!({"status": "ok"}));
}

#[tokio::test]
async fn chat_replies_in_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;
    let (status, body) = post(&app, "/api/chat", json!({"message": "What is your phone number?"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["data"]["reply"].as_str().unwrap().contains("(555) 123-4567"));
}

#[tokio::test]
async fn missing_json_field_is_rewritten_into_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;
    let (status, body) = post(&app, "/api/chat", json!({"text": "hi"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("UNPROCESSABLE_ENTITY"));
    assert_eq!(body["error"]["details"][0]["path"], json!("message"));
}

#[tokio::test]
async fn inquiry_validation() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;
    let mut inquiry = json!({
        "name": "Dana", "email": "dana@example.com", "phone": "555-0100",
        "insuranceType": "home", "message": "Quote please", "recaptchaToken": "t"
    });
    let (status, body) = post(&app, "/api/send-inquiry", inquiry.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["message"],
        json!("Thank you for contacting us. We will get back to you soon.")
    );

    inquiry["email"] = json!("not-an-email");
    let (status, body) = post(&app, "/api/send-inquiry", inquiry).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_EMAIL"));
}

#[tokio::test]
async fn csv_rows_append_after_header() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;
    for row in ["a,1", "b,2"] {
        let (status, _) = post(
            &app,
            "/save-to-csv",
            json!({"filename": "quotes.csv", "data": format!("k,v\n{row}\n")}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let text = std::fs::read_to_string(dir.path().join("quotes.csv")).unwrap();
    assert_eq!(text, "k,v\na,1\nb,2\n");

    let (status, body) = post(&app, "/save-to-csv", json!({"filename": "../evil.csv", "data": "k\nv"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("INVALID_FILENAME"));

    let (status, _) = post(&app, "/save-to-csv", json!({"filename": "quotes.csv"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn saved_content_is_searchable_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;

    let (_, body) = post(&app, "/api/search", json!({"query": "roadside assistance"})).await;
    assert_eq!(body["data"]["results"], json!([]));

    let content = "=== SECTION: SERVICES ===\n## Auto Insurance\nAuto policies with roadside assistance.\n";
    let (status, body) = post(&app, "/save-content", json!({"content": content})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["records"], json!(3));
    assert_eq!(body["data"]["filePath"], json!("/data/website_content.txt"));

    let (status, body) = post(&app, "/api/search", json!({"query": "roadside assistance", "k": 2})).await;
    assert_eq!(status, StatusCode::OK);
    let results = body["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(
        results
            .iter()
            .any(|r| r["record"]["type"] == json!("auto-description"))
    );
}

#[tokio::test]
async fn html_is_converted_before_saving() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(dir.path()).await;
    let html = r#"<section id="about"><h1>About Us</h1><p>Family owned since 2001.</p></section>"#;
    let (status, body) = post(&app, "/save-content/html", json!({"html": html})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["records"], json!(3));

    let saved = std::fs::read_to_string(dir.path().join("website_content.txt")).unwrap();
    assert!(saved.contains("=== SECTION: ABOUT ==="));
    assert!(saved.contains("# About Us"));
}
