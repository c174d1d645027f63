//! Shared helpers for tests: in-memory SQLite pools and a request driver for the full router.

use crate::config::AppConfig;
use crate::migration::apply_migrations;
use crate::routes::build_router;
use crate::state::AppState;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tower::ServiceExt;

/// In-memory database without tables. One connection, kept open, so every query sees the same data.
pub async fn empty_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(false);
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap()
}

/// In-memory database with all entity tables created.
pub async fn test_pool() -> SqlitePool {
    let pool = empty_pool().await;
    apply_migrations(&pool).await.unwrap();
    pool
}

pub fn test_app(pool: SqlitePool) -> Router {
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        seed_on_startup: false,
        ..AppConfig::default()
    };
    let state = AppState::new(pool, &config);
    build_router(state, &config)
}

/// Send one request through the router. Returns status and the parsed JSON body (Null when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_with_headers(app, method, uri, body, &[]).await
}

pub async fn send_with_headers(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
