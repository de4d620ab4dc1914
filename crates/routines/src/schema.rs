//! Schema validation for "add routine" payloads.
//!
//! Rules enforced:
//! 1. The payload must be a JSON object.
//! 2. `name`, `time`, `action` and `repeat` are all required and non-null.
//! 3. `name`, `action` and `repeat` are strings of 1 to 16 characters.
//! 4. `time` is an integer that fits in an `i64`; whole-valued floats and
//!    decimal strings such as `480.0` or `"480"` are normalized to one.
//!
//! All violations are collected rather than stopping at the first one.
//! Unknown fields are ignored and do not reach the normalized record.

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{FieldError, ValidationErrors};
use crate::models::{Routine, MAX_TEXT_LEN, MIN_TEXT_LEN};

/// Validate `payload` and return the normalized [`Routine`].
///
/// # Errors
/// Returns [`ValidationErrors`] listing every failed constraint.
pub fn validate_routine(payload: &Value) -> Result<Routine, ValidationErrors> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationErrors(vec![FieldError::new(
            "__root__",
            "type_error.dict",
            "value is not a valid dict",
        )]));
    };

    let mut errors = Vec::new();

    let name = text_field(object, "name", &mut errors);
    let time = integer_field(object, "time", &mut errors);
    let action = text_field(object, "action", &mut errors);
    let repeat = text_field(object, "repeat", &mut errors);

    match (name, time, action, repeat) {
        (Some(name), Some(time), Some(action), Some(repeat)) if errors.is_empty() => {
            Ok(Routine { name, time, action, repeat })
        }
        _ => {
            debug!(count = errors.len(), "routine payload rejected");
            Err(ValidationErrors(errors))
        }
    }
}

/// Look up a required field, recording an error if it is absent or null.
fn required<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    match object.get(field) {
        None => {
            errors.push(FieldError::new(field, "value_error.missing", "field required"));
            None
        }
        Some(Value::Null) => {
            errors.push(FieldError::new(
                field,
                "type_error.none.not_allowed",
                "none is not an allowed value",
            ));
            None
        }
        Some(value) => Some(value),
    }
}

fn text_field(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = required(object, field, errors)?;

    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(field, "type_error.str", "str type expected"));
        return None;
    };

    // Length is measured in characters, not bytes.
    let len = text.chars().count();
    if len < MIN_TEXT_LEN {
        errors.push(
            FieldError::new(
                field,
                "value_error.any_str.min_length",
                format!("ensure this value has at least {MIN_TEXT_LEN} characters"),
            )
            .with_ctx(json!({ "limit_value": MIN_TEXT_LEN })),
        );
        return None;
    }
    if len > MAX_TEXT_LEN {
        errors.push(
            FieldError::new(
                field,
                "value_error.any_str.max_length",
                format!("ensure this value has at most {MAX_TEXT_LEN} characters"),
            )
            .with_ctx(json!({ "limit_value": MAX_TEXT_LEN })),
        );
        return None;
    }

    Some(text.to_string())
}

fn integer_field(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i64> {
    let value = required(object, field, errors)?;

    match coerce_integer(value) {
        Some(n) => Some(n),
        None => {
            errors.push(FieldError::new(
                field,
                "type_error.integer",
                "value is not a valid integer",
            ));
            None
        }
    }
}

/// Integers pass through; whole-valued floats and decimal strings are
/// normalized.  Fractions, booleans and out-of-range values are not integers.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
            (f.fract() == 0.0 && in_range).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
