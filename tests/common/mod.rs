use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http::{AppState, router};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Builds a fresh service router backed by an empty in-memory store.
pub fn test_app() -> Router {
    let processor = ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new()));
    router(AppState::new(processor))
}

/// A receipt that passes every validation rule.
pub fn sample_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2024-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew", "price": "1.25" }
        ],
        "total": "35.35"
    })
}

pub async fn post_json(app: &Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// Submits a receipt expecting success and returns the assigned identifier.
pub async fn process_receipt(app: &Router, receipt: Value) -> String {
    let response = post_json(app, "/receipts/process", receipt.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["id"].as_str().expect("id missing").to_string()
}
