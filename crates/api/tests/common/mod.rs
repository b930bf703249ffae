#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serieswatch_api::config::{LogFormat, ServerConfig};
use serieswatch_api::router::build_app_router;
use serieswatch_api::state::AppState;
use serieswatch_db::store::{MemoryUserStore, UserStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app_with(store: Arc<dyn UserStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// Build the full application router over a fresh in-process store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryUserStore::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    username: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(username) = username {
        builder = builder.header("username", username);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, username: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, username, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    username: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, username, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    username: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, username, Some(body)).await
}

pub async fn patch_json(
    app: &Router,
    uri: &str,
    username: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, username, Some(body)).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register a user and return the created JSON.
pub async fn create_user(app: &Router, name: &str, username: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/users",
        None,
        serde_json::json!({ "name": name, "username": username }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

/// Create a series for `username` and return its id.
pub async fn create_series(app: &Router, username: &str, name: &str, qt_episodes: u32) -> String {
    let response = post_json(
        app,
        "/series",
        Some(username),
        serde_json::json!({ "name": name, "qt_episodes": qt_episodes }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}
