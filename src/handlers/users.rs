//! User registration. Listing goes through the generic entity handler.

use super::body_to_map;
use crate::error::AppError;
use crate::models::User;
use crate::response::created;
use crate::service::{password::hash_password, CrudService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;
use std::collections::HashMap;

pub const MISSING_CREDENTIALS: &str = "Bad request, 'email' and 'password' are required";

/// POST /users — `email` and `password` required; the account starts active.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body).map_err(|_| AppError::BadRequest(MISSING_CREDENTIALS.into()))?;
    if RequestValidator::first_missing(&body, &["email", "password"]).is_some() {
        return Err(AppError::BadRequest(MISSING_CREDENTIALS.into()));
    }
    let email = string_field(&body, "email")?;
    let password = string_field(&body, "password")?;

    let mut row = HashMap::with_capacity(3);
    row.insert("email".to_string(), Value::String(email.to_string()));
    row.insert("password_hash".to_string(), Value::String(hash_password(password)?));
    row.insert("is_active".to_string(), Value::Bool(true));

    let user = CrudService::create::<User>(&state.pool, &row).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(created(user))
}

fn string_field<'a>(body: &'a HashMap<String, Value>, name: &str) -> Result<&'a str, AppError> {
    body.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest(format!("'{name}' must be a string")))
}
