//! Entity handlers shared by people and planets: list, read by id, create.

use super::body_to_map;
use crate::error::AppError;
use crate::models::Entity;
use crate::response::{created, ok, ok_many};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list<T: Entity>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<T>(&state.pool).await?;
    Ok(ok_many(rows))
}

pub async fn read<T: Entity>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::read::<T>(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(T::NOT_FOUND.into()))?;
    Ok(ok(row))
}

pub async fn create<T: Entity>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let row = CrudService::create::<T>(&state.pool, &body).await?;
    tracing::info!(table = T::TABLE, "row created");
    Ok(created(row))
}
