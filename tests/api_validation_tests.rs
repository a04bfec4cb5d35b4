//! Client-input validation through the real router.
//!
//! Every request here is rejected (or fails on an unconfigured collaborator)
//! before the handler touches the database, so a disconnected connection is
//! enough state.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use pastry_backend::handlers::{cake, order, pricing, upload};
use pastry_backend::services::{notification::NotificationService, storage::StorageService};
use pastry_backend::AppState;

fn build_test_router() -> Router {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        notifier: NotificationService::new(String::new(), String::new()),
        storage: StorageService::new(String::new(), "cake-images".to_string(), String::new()),
    };

    Router::new()
        .route("/api/orders", post(order::place_order))
        .route("/api/orders/cancel", post(order::cancel_order))
        .route("/api/orders/search", get(order::search_order))
        .route("/api/cakes", post(cake::create_cake))
        .route("/api/cakes/quote", post(pricing::quote_cake))
        .route("/api/upload", post(upload::upload_image))
        .with_state(state)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_place_order_requires_items() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/orders",
        json!({
            "name": "Asha",
            "phone": "9876543210",
            "tableNumber": "4",
            "isParcelOrder": false,
            "items": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Items are required");
}

#[tokio::test]
async fn test_cancel_rejects_missing_and_malformed_locators() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders/cancel")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = build_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders/cancel?id=not-an-order")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_requires_all_three_parameters() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/orders/search?orderNumber=20260801001")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_rejects_bad_date() {
    let response = build_test_router()
        .oneshot(
            Request::builder()
                .uri("/api/orders/search?orderNumber=20260801001&phoneNumber=9876543210&date=01-08-2026")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cake_save_validates_phone_and_message() {
    let payload = |phone: &str, message: &str| {
        json!({
            "name": "Meera",
            "phone": phone,
            "price": 1500,
            "weightKg": "2",
            "icing": "Fondant",
            "flavour": "Chocolate",
            "cakeType": "Regular Cake",
            "shape": "Round",
            "message": message,
            "withEgg": false,
            "deliveryTimestamp": "2026-08-10T15:00:00Z"
        })
    };

    let (status, body) = post_json(
        build_test_router(),
        "/api/cakes",
        payload("12345", "Happy Birthday"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Phone must be exactly 10 digits");

    let long_message = "x".repeat(41);
    let (status, _) = post_json(
        build_test_router(),
        "/api/cakes",
        payload("9876543210", &long_message),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quote_rejects_negative_weight() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/cakes/quote",
        json!({ "weightKg": "-1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Weight must be non-negative");
}

#[tokio::test]
async fn test_upload_rejects_bad_payloads_and_reports_storage_failure() {
    let (status, body) = post_json(
        build_test_router(),
        "/api/upload",
        json!({ "dataUrl": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image data provided");

    let (status, _) = post_json(
        build_test_router(),
        "/api/upload",
        json!({ "dataUrl": "not a data url" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Well-formed payload, but storage is unconfigured: generic 500, nothing
    // leaks about the backend
    let (status, body) = post_json(
        build_test_router(),
        "/api/upload",
        json!({ "dataUrl": "data:image/png;base64,Y2FrZQ==" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to upload image.");
}
