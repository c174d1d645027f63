//! Operational routes: liveness, schema readiness, build version.

use crate::models::{Entity, Favorite, Person, Planet, User};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

const ENTITY_TABLES: [&str; 4] = [Person::TABLE, Planet::TABLE, User::TABLE, Favorite::TABLE];

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

/// Entity tables absent from the schema.
async fn missing_tables(state: &AppState) -> Result<Vec<&'static str>, sqlx::Error> {
    let present: Vec<String> = sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(&state.pool)
        .await?;
    Ok(ENTITY_TABLES
        .into_iter()
        .filter(|t| !present.iter().any(|p| p == t))
        .collect())
}

/// 200 once every entity table exists; 503 when the database is unreachable or the schema is incomplete.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match missing_tables(&state).await {
        Ok(missing) if missing.is_empty() => (
            StatusCode::OK,
            Json(Readiness { status: "ready", missing_tables: missing }),
        ),
        Ok(missing) => {
            tracing::warn!(?missing, "schema incomplete");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness { status: "schema_incomplete", missing_tables: missing }),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness { status: "database_unavailable", missing_tables: Vec::new() }),
            )
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn version() -> Json<Value> {
    Json(json!({ "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{empty_pool, send, test_app, test_pool};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn health_is_static() {
        let app = test_app(empty_pool().await);
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn ready_once_migrated() {
        let pool = test_pool().await;
        let app = test_app(pool.clone());
        let (status, body) = send(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ready"}));

        pool.close().await;
        let (status, body) = send(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "database_unavailable");
    }

    #[tokio::test]
    async fn unmigrated_schema_lists_missing_tables() {
        let pool = empty_pool().await;
        sqlx::query(r#"CREATE TABLE "people" (id INTEGER PRIMARY KEY)"#)
            .execute(&pool)
            .await
            .unwrap();
        let app = test_app(pool);
        let (status, body) = send(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "schema_incomplete");
        assert_eq!(body["missing_tables"], json!(["planet", "user", "favorite"]));
    }

    #[tokio::test]
    async fn version_names_the_package() {
        let app = test_app(test_pool().await);
        let (_, body) = send(&app, Method::GET, "/version", None).await;
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
