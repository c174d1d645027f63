//! Shared application state for all routes.

use crate::config::AppConfig;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Caller identity when a request does not name one.
    pub default_user_id: i64,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Self {
        AppState {
            pool,
            default_user_id: config.default_user_id,
        }
    }
}
