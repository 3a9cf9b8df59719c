mod common;

use axum::{
    body::to_bytes,
    http::{header, Method, StatusCode},
};
use common::TestApp;

#[tokio::test]
async fn healthcheck_answers_plain_ok() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/healthcheck", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn status_reports_database_up() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "up");
    assert_eq!(body["data"]["database"]["status"], "up");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/buyers", None).await;
    assert!(response.headers().contains_key("x-request-id"));

    let response = app.request(Method::GET, "/api/v1/buyers/0", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn errors_are_json() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/sellers/5", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["components"]["schemas"]["Buyer"].is_object());
}
