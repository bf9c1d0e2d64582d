//! Payload shape checks: JSON object, required fields present, fields of the right type.

use crate::error::AppError;
use crate::subject::SubjectFields;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Every field in `required` must be present and non-null.
    pub fn require(body: &Map<String, Value>, required: &[&str]) -> Result<(), AppError> {
        for col in required {
            match body.get(*col) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", col)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Turn a create/update body into the four subject fields. Unknown keys, including
    /// any client-supplied `id`, are dropped.
    pub fn subject_fields(body: Value) -> Result<SubjectFields, AppError> {
        let map = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        Self::require(&map, &SubjectFields::REQUIRED)?;
        serde_json::from_value(Value::Object(map)).map_err(|e| AppError::Validation(e.to_string()))
    }
}
