//! Catalogue routes: people, planets, users and favorites.

use crate::handlers::{
    entity,
    favorites::{
        add_favorite_people, add_favorite_planet, delete_favorite_people, delete_favorite_planet, list_favorites,
    },
    root::{hello_user, home},
    users::create_user,
};
use crate::models::{Person, Planet, User};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/user", get(hello_user))
        .route("/people", get(entity::list::<Person>).post(entity::create::<Person>))
        .route("/people/:id", get(entity::read::<Person>))
        .route("/planets", get(entity::list::<Planet>).post(entity::create::<Planet>))
        .route("/planets/:id", get(entity::read::<Planet>))
        .route("/users", get(entity::list::<User>).post(create_user))
        .route("/users/favorites", get(list_favorites))
        .route(
            "/favorite/planet/:planet_id",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/:people_id",
            post(add_favorite_people).delete(delete_favorite_people),
        )
        .with_state(state)
}
