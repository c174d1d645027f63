//! Request validation from entity field specs: presence of required fields and basic types.

use crate::error::AppError;
use crate::models::FieldSpec;
use crate::sql::SqlValue;
use serde_json::Value;
use std::collections::HashMap;

pub struct RequestValidator;

impl RequestValidator {
    /// First of `names` that is absent or null in `body`.
    pub fn first_missing<'a>(body: &HashMap<String, Value>, names: &[&'a str]) -> Option<&'a str> {
        names
            .iter()
            .copied()
            .find(|n| matches!(body.get(*n), None | Some(Value::Null)))
    }

    /// Validate body against the writable fields and convert to bind values.
    /// Keys that are not writable fields are ignored.
    pub fn insert_values(
        body: &HashMap<String, Value>,
        fields: &[FieldSpec],
    ) -> Result<Vec<(&'static str, SqlValue)>, AppError> {
        let mut out = Vec::with_capacity(fields.len());
        for field in fields {
            match body.get(field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(AppError::BadRequest(format!("'{}' is required", field.name)));
                }
                None => {}
                Some(v) => out.push((field.name, SqlValue::from_json(field.name, field.kind, v)?)),
            }
        }
        Ok(out)
    }
}
