//! HTTP handlers: generic entity reads/creates, users, favorites, and the greeting routes.

pub mod entity;
pub mod favorites;
pub mod root;
pub mod users;

use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;

fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
