//! End-to-end product API flow against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_server::{build_router, MemoryProductStore, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn widget_walkthrough() {
    let app = build_router(Arc::new(MemoryProductStore::new()), &ServerConfig::default());
    let widget = json!({
        "name": "Widget",
        "description": "d",
        "price": 9.99,
        "categoria": "tools",
        "email_fornecedor": "a@b.com"
    });

    let (status, created) = call(&app, json_request("POST", "/products", widget.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");

    let mut expected = widget.clone();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    let uri = format!("/products/{id}");
    let (status, fetched) = call(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, expected);

    let (status, deleted) = call(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, expected);

    let (status, body) = call(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product not found");

    let (status, _) = call(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn partial_update_leaves_other_fields() {
    let app = build_router(Arc::new(MemoryProductStore::new()), &ServerConfig::default());
    let (_, created) = call(
        &app,
        json_request(
            "POST",
            "/products/",
            json!({
                "name": "Lamp",
                "description": "desk lamp",
                "price": 25.0,
                "categoria": "lighting",
                "email_fornecedor": "lamps@example.com"
            }),
        ),
    )
    .await;
    let uri = format!("/products/{}", created["id"]);

    let (status, updated) = call(
        &app,
        json_request("PUT", &uri, json!({"email_fornecedor": "new@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email_fornecedor"], "new@example.com");
    assert_eq!(updated["name"], "Lamp");
    assert_eq!(updated["price"], 25.0);

    let (status, unchanged) = call(&app, json_request("PUT", &uri, json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, updated);
}
