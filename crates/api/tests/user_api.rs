//! HTTP-level integration tests for the `/users` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, create_user, post_json, put_json};
use serde_json::json;
use serieswatch_db::store::MemoryUserStore;

// ---------------------------------------------------------------------------
// POST /users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_user_returns_201_with_empty_series() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/users",
        None,
        json!({"name": "Alice", "username": "alice"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["username"], "alice");
    assert!(json["id"].is_string());
    assert_eq!(json["series"], json!([]));
}

#[tokio::test]
async fn duplicate_username_returns_400_and_creates_nothing() {
    let store = Arc::new(MemoryUserStore::new());
    let app = common::build_test_app_with(store.clone());
    create_user(&app, "Alice", "alice").await;

    let response = post_json(
        &app,
        "/users",
        None,
        json!({"name": "Impostor", "username": "alice"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "User already exists");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_user_with_null_name_stores_empty_name() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/users",
        None,
        json!({"name": null, "username": "alice"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "");
}

#[tokio::test]
async fn usernames_differing_in_case_are_distinct() {
    let app = common::build_test_app();
    create_user(&app, "Alice", "alice").await;
    create_user(&app, "Alice", "Alice").await;
}

#[tokio::test]
async fn each_user_gets_a_distinct_id() {
    let app = common::build_test_app();
    let a = create_user(&app, "A", "a").await;
    let b = create_user(&app, "B", "b").await;
    assert_ne!(a["id"], b["id"]);
}

// ---------------------------------------------------------------------------
// PUT /users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_name_returns_updated_user() {
    let app = common::build_test_app();
    let created = create_user(&app, "Alice", "alice").await;

    let response = put_json(&app, "/users", Some("alice"), json!({"name": "Alicia"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Alicia");
    assert_eq!(json["username"], "alice");
    assert_eq!(json["id"], created["id"]);
}

#[tokio::test]
async fn update_name_accepts_missing_name_as_empty() {
    let app = common::build_test_app();
    create_user(&app, "Alice", "alice").await;

    let response = put_json(&app, "/users", Some("alice"), json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "");
}

#[tokio::test]
async fn update_name_accepts_non_string_name_as_empty() {
    let app = common::build_test_app();
    create_user(&app, "Alice", "alice").await;

    let response = put_json(&app, "/users", Some("alice"), json!({"name": 42})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "");
}

#[tokio::test]
async fn update_name_for_unknown_user_returns_404() {
    let app = common::build_test_app();
    let response = put_json(&app, "/users", Some("nobody"), json!({"name": "X"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "User not found.");
}

#[tokio::test]
async fn update_name_without_username_header_returns_404() {
    let app = common::build_test_app();
    create_user(&app, "Alice", "alice").await;

    let response = put_json(&app, "/users", None, json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
