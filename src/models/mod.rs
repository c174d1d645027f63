//! Entity records and their table definitions. Serialization is the record's `Serialize` impl.

mod favorite;
mod person;
mod planet;
mod user;

pub use favorite::{Favorite, FavoriteTarget};
pub use person::Person;
pub use planet::Planet;
pub use user::User;

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// Storage kind of a writable field; drives conversion of request JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Bool,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Bool => "a boolean",
        }
    }
}

/// A column that callers may set on insert.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        FieldSpec { name, kind, required: false }
    }
}

/// A table-backed record. `COLUMNS` is the full select list, `id` first.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const FIELDS: &'static [FieldSpec];
    /// Body of the 404 returned when an id lookup misses. Declared by every entity, routed or not.
    const NOT_FOUND: &'static str;
}
