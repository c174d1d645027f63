use super::{Entity, FieldKind, FieldSpec};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
}

impl Entity for Person {
    const TABLE: &'static str = "people";
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "birth_year", "gender", "height", "skin_color", "eye_color"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("birth_year", FieldKind::Text),
        FieldSpec::optional("gender", FieldKind::Text),
        FieldSpec::optional("height", FieldKind::Text),
        FieldSpec::optional("skin_color", FieldKind::Text),
        FieldSpec::optional("eye_color", FieldKind::Text),
    ];
    const NOT_FOUND: &'static str = "Person no encontrada";
}
