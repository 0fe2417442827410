#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lore_api::app::build_router;
use lore_api::config::{CorsOrigins, ServerConfig};
use lore_api::state::AppState;
use lore_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".parse().unwrap()]),
        static_dir: static_dir.to_path_buf(),
        request_timeout_secs: 30,
    }
}

/// Open a fresh in-memory database with migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = lore_db::create_pool("sqlite::memory:", 1).await.unwrap();
    lore_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router with all middleware layers.
///
/// Uses the same `build_router` as `main.rs`, so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(pool: DbPool, static_dir: &Path) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config(static_dir)),
    };
    build_router(state)
}

/// Fresh database plus router. Static files point at a directory that does
/// not exist; tests that need them call [`build_test_app`] directly.
pub async fn test_app() -> (Router, DbPool) {
    let pool = test_pool().await;
    let app = build_test_app(pool.clone(), Path::new("/nonexistent-static"));
    (app, pool)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "POST", uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, "PUT", uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn json_request(app: Router, method: &str, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a character through the API and return its id.
pub async fn create_character(app: &Router, body: serde_json::Value) -> i64 {
    let response = post_json(app.clone(), "/characters/", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
