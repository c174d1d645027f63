use super::{Entity, FieldKind, FieldSpec};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string; never part of a response.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
}

impl Entity for User {
    const TABLE: &'static str = "user";
    const COLUMNS: &'static [&'static str] = &["id", "email", "password_hash", "is_active"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::required("password_hash", FieldKind::Text),
        FieldSpec::optional("is_active", FieldKind::Bool),
    ];
    const NOT_FOUND: &'static str = "Usuario no encontrado";
}
