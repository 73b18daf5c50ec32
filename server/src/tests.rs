//! Router Tests
//!
//! Requests go through the full router against a temporary `dist/`.

use std::collections::BTreeMap;
use std::fs;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn test_app(dist: &Path) -> Router {
    fs::write(dist.join("index.html"), "<html>todo-env</html>").expect("index");
    let env: BTreeMap<String, String> = [("TODO_PUBLIC_B", "2"), ("TODO_PUBLIC_A", "1")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    build_router(AppState::new(env), dist)
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

#[tokio::test]
async fn env_endpoint_returns_snapshot_object() {
    let dist = tempfile::tempdir().expect("tempdir");
    let (status, body) = get_body(test_app(dist.path()), "/api/env").await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(value, serde_json::json!({"TODO_PUBLIC_A": "1", "TODO_PUBLIC_B": "2"}));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let dist = tempfile::tempdir().expect("tempdir");
    let (status, body) = get_body(test_app(dist.path()), "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dist = tempfile::tempdir().expect("tempdir");
    let app = test_app(dist.path());

    for uri in ["/", "/env"] {
        let (status, body) = get_body(app.clone(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, b"<html>todo-env</html>", "{uri}");
    }
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let dist = tempfile::tempdir().expect("tempdir");
    let (status, _) = get_body(test_app(dist.path()), "/api/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
