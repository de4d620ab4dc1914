//! Validation error types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One failed constraint on one field of an inbound payload.
///
/// Serialises as `{"loc": [...], "msg": "...", "type": "...", "ctx": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending value; `["__root__"]` for the payload itself.
    pub loc: Vec<String>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable constraint identifier, e.g. `value_error.missing`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Constraint parameters, e.g. `{"limit_value": 16}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl FieldError {
    pub fn new(field: &str, kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![field.to_string()],
            msg: msg.into(),
            kind: kind.into(),
            ctx: None,
        }
    }

    pub fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// The field this error refers to.
    pub fn field(&self) -> &str {
        self.loc.first().map(String::as_str).unwrap_or_default()
    }
}

/// Every constraint a payload violated, in field declaration order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation error(s) for routine", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    /// `true` if any error names `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}
