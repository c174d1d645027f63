//! Generic CRUD execution against SQLite.

use crate::error::AppError;
use crate::models::Entity;
use crate::service::RequestValidator;
use crate::sql::{count, delete_by_id, insert, select, QueryBuf, SqlValue};
use serde_json::Value;
use sqlx::{SqliteExecutor, SqlitePool};
use std::collections::HashMap;

pub struct CrudService;

impl CrudService {
    /// All rows in insertion order.
    pub async fn list<T: Entity>(pool: &SqlitePool) -> Result<Vec<T>, AppError> {
        Self::list_where(pool, &[]).await
    }

    /// All rows matching every equality filter, in insertion order.
    pub async fn list_where<T: Entity>(
        pool: &SqlitePool,
        filters: &[(&str, SqlValue)],
    ) -> Result<Vec<T>, AppError> {
        let q = select(T::TABLE, T::COLUMNS, filters, None);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    /// Fetch one row by primary key.
    pub async fn read<T: Entity>(pool: &SqlitePool, id: i64) -> Result<Option<T>, AppError> {
        Self::find_first(pool, &[("id", SqlValue::Integer(id))]).await
    }

    /// First row (lowest id) matching every equality filter.
    pub async fn find_first<T: Entity>(
        pool: &SqlitePool,
        filters: &[(&str, SqlValue)],
    ) -> Result<Option<T>, AppError> {
        let q = select(T::TABLE, T::COLUMNS, filters, Some(1));
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(pool).await?)
    }

    /// Validate a request body against the entity's writable fields and insert it.
    pub async fn create<T: Entity>(
        pool: &SqlitePool,
        body: &HashMap<String, Value>,
    ) -> Result<T, AppError> {
        let values = RequestValidator::insert_values(body, T::FIELDS)?;
        Self::insert(pool, &values).await
    }

    /// Insert one row from already-typed values. Returns the stored row.
    pub async fn insert<'c, T, X>(executor: X, values: &[(&str, SqlValue)]) -> Result<T, AppError>
    where
        T: Entity,
        X: SqliteExecutor<'c>,
    {
        let q = insert(T::TABLE, values, T::COLUMNS);
        Self::execute_returning_one(executor, &q)
            .await
            .map_err(map_write_error)
    }

    /// Delete one row by id. Returns whether a row was removed.
    pub async fn delete<T: Entity>(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let q = delete_by_id(T::TABLE, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count<'c, T, X>(executor: X) -> Result<i64, AppError>
    where
        T: Entity,
        X: SqliteExecutor<'c>,
    {
        let q = count(T::TABLE);
        tracing::debug!(sql = %q.sql, "query");
        Ok(sqlx::query_scalar::<_, i64>(&q.sql).fetch_one(executor).await?)
    }

    async fn execute_returning_one<'c, T, X>(executor: X, q: &QueryBuf) -> Result<T, sqlx::Error>
    where
        T: Entity,
        X: SqliteExecutor<'c>,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query.fetch_one(executor).await
    }
}

pub const DUPLICATE_RECORD: &str = "Registro duplicado";

fn map_write_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::debug!(detail = db.message(), "unique constraint violated");
            AppError::Conflict(DUPLICATE_RECORD.into())
        }
        _ => AppError::Db(e),
    }
}
