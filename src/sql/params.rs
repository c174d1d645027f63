//! Convert serde_json::Value to values that sqlx can bind against SQLite.

use crate::error::AppError;
use crate::models::FieldKind;
use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to an SQLite statement.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl SqlValue {
    /// Convert a request value for column `col` of the given kind.
    /// Text columns also take numbers and store their decimal form.
    pub fn from_json(col: &str, kind: FieldKind, v: &Value) -> Result<Self, AppError> {
        let bad = || AppError::BadRequest(format!("'{}' must be {}", col, kind.describe()));
        Ok(match (kind, v) {
            (_, Value::Null) => SqlValue::Null,
            (FieldKind::Text, Value::String(s)) => SqlValue::Text(s.clone()),
            (FieldKind::Text, Value::Number(n)) => SqlValue::Text(n.to_string()),
            (FieldKind::Integer, Value::Number(n)) => SqlValue::Integer(n.as_i64().ok_or_else(bad)?),
            (FieldKind::Bool, Value::Bool(b)) => SqlValue::Bool(*b),
            _ => return Err(bad()),
        })
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Integer(n)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            SqlValue::Null => <Option<i64> as Encode<Sqlite>>::encode_by_ref(&None, buf),
            SqlValue::Bool(b) => <bool as Encode<Sqlite>>::encode_by_ref(b, buf),
            SqlValue::Integer(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqlValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
        }
    }
}

impl sqlx::Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <str as sqlx::Type<Sqlite>>::type_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_columns_accept_numbers_as_text() {
        let v = SqlValue::from_json("diameter", FieldKind::Text, &json!(10465)).unwrap();
        assert_eq!(v, SqlValue::Text("10465".into()));
    }

    #[test]
    fn null_is_accepted_for_any_kind() {
        for kind in [FieldKind::Text, FieldKind::Integer, FieldKind::Bool] {
            assert_eq!(SqlValue::from_json("x", kind, &Value::Null).unwrap(), SqlValue::Null);
        }
    }

    #[test]
    fn mismatched_kinds_are_bad_requests() {
        let err = SqlValue::from_json("is_active", FieldKind::Bool, &json!("yes")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "'is_active' must be a boolean"));
        let err = SqlValue::from_json("user_id", FieldKind::Integer, &json!(1.5)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = SqlValue::from_json("name", FieldKind::Text, &json!(["a"])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
