//! API error type with HTTP status code mapping.
//!
//! Client mistakes (schema violations, unparseable bodies) become 400s with
//! a list of field errors under `error`.  Store failures become an opaque
//! 500; the cause is logged, never echoed back.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use routines::{FieldError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload parsed but failed the routine schema (400).
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Body was not readable as JSON (400).
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// The document store failed (500).
    #[error("store error: {0}")]
    Store(#[from] db::DbError),

    /// Anything else that is our fault (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": errors.into_errors() })))
                    .into_response()
            }
            ApiError::MalformedBody(reason) => {
                let detail = FieldError::new("__root__", "value_error.jsondecode", reason);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": [detail] }))).into_response()
            }
            ApiError::Store(err) => {
                error!(error = %err, "document store failure");
                internal_error()
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "internal error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error" })),
    )
        .into_response()
}
