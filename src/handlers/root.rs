//! Greeting routes: GET / and GET /user.

use crate::response::{msg, MsgBody};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeBody {
    message: &'static str,
}

pub async fn home() -> Json<WelcomeBody> {
    Json(WelcomeBody {
        message: "Bienvenido a la API SW",
    })
}

pub async fn hello_user() -> (StatusCode, Json<MsgBody>) {
    msg("Hola, Esta es la solicitud GET /user response ")
}
