//! Connection pool bootstrap. The database file is created when missing.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open the pool described by `config`. Call once at startup and share the handle.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|_| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: config.database_url.clone(),
        })?
        .create_if_missing(true)
        .foreign_keys(config.enforce_foreign_keys);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(url = %config.database_url, "database pool ready");
    Ok(pool)
}
