//! Star Wars catalogue API: people, planets, users and their favorites over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::build_router;
pub use seed::populate;
pub use service::CrudService;
pub use state::AppState;
pub use store::connect;
