//! Extract the calling user's id from the request (e.g. X-User-Id header).

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header naming the caller. Default: `X-User-Id`.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Caller identity for favorite operations. Falls back to the state's default user when the header is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(CurrentUser(state.default_user_id));
        };
        raw.to_str()
            .ok()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(CurrentUser)
            .ok_or_else(|| AppError::BadRequest(format!("{} must be a positive integer", USER_ID_HEADER)))
    }
}
