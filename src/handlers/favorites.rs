//! Favorites of the calling user: list, add and remove planet/person favorites.

use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::models::{Entity, Favorite, FavoriteTarget};
use crate::response::{created, msg, ok_many};
use crate::service::CrudService;
use crate::sql::SqlValue;
use serde_json::Value;
use std::collections::HashMap;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub const FAVORITE_REMOVED: &str = "Favorito eliminado";

/// GET /users/favorites
pub async fn list_favorites(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows =
        CrudService::list_where::<Favorite>(&state.pool, &[("user_id", SqlValue::Integer(user_id))]).await?;
    Ok(ok_many(rows))
}

/// POST /favorite/planet/:planet_id
pub async fn add_favorite_planet(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user, FavoriteTarget::Planet(planet_id)).await
}

/// POST /favorite/people/:people_id
pub async fn add_favorite_people(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user, FavoriteTarget::Person(people_id)).await
}

/// DELETE /favorite/planet/:planet_id
pub async fn delete_favorite_planet(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user, FavoriteTarget::Planet(planet_id)).await
}

/// DELETE /favorite/people/:people_id
pub async fn delete_favorite_people(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user, FavoriteTarget::Person(people_id)).await
}

async fn add(
    state: &AppState,
    CurrentUser(user_id): CurrentUser,
    target: FavoriteTarget,
) -> Result<impl IntoResponse, AppError> {
    let body = HashMap::from([
        ("user_id".to_string(), Value::from(user_id)),
        (target.column().to_string(), Value::from(target.id())),
    ]);
    let favorite = CrudService::create::<Favorite>(&state.pool, &body).await?;
    tracing::info!(user_id, favorite_id = favorite.id, target = ?target, "favorite added");
    Ok(created(favorite))
}

/// Removes the first matching favorite; duplicates, if any, stay until removed one by one.
async fn remove(
    state: &AppState,
    CurrentUser(user_id): CurrentUser,
    target: FavoriteTarget,
) -> Result<impl IntoResponse, AppError> {
    let favorite = CrudService::find_first::<Favorite>(&state.pool, &target.filter(user_id))
        .await?
        .ok_or_else(|| AppError::NotFound(Favorite::NOT_FOUND.into()))?;
    if !CrudService::delete::<Favorite>(&state.pool, favorite.id).await? {
        // Deleted by a concurrent request between lookup and delete.
        return Err(AppError::NotFound(Favorite::NOT_FOUND.into()));
    }
    tracing::info!(user_id, favorite_id = favorite.id, target = ?favorite.target(), "favorite removed");
    Ok(msg(FAVORITE_REMOVED))
}
