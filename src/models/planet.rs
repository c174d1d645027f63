use super::{Entity, FieldKind, FieldSpec};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub diameter: Option<String>,
    pub population: Option<String>,
}

impl Entity for Planet {
    const TABLE: &'static str = "planet";
    const COLUMNS: &'static [&'static str] = &["id", "name", "climate", "diameter", "population"];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("climate", FieldKind::Text),
        FieldSpec::optional("diameter", FieldKind::Text),
        FieldSpec::optional("population", FieldKind::Text),
    ];
    const NOT_FOUND: &'static str = "Planeta no encontrado";
}
