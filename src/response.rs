//! Response helpers. Bodies are plain JSON values or arrays; messages use `{"msg": ...}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MsgBody {
    pub msg: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn msg(text: impl Into<String>) -> (StatusCode, Json<MsgBody>) {
    (StatusCode::OK, Json(MsgBody { msg: text.into() }))
}
