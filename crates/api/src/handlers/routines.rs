//! Routine handlers (list, add).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use routines::{validate_routine, LIST_LIMIT, ROUTINES_COLLECTION};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListRoutinesResponse {
    pub routines: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct AddRoutineResponse {
    pub success: bool,
}

/// Lists stored routines, at most [`LIST_LIMIT`] of them.
///
/// `GET /api/routines/get`
#[instrument(skip_all)]
pub async fn list_routines(
    State(state): State<AppState>,
) -> Result<Json<ListRoutinesResponse>, ApiError> {
    let routines = state.store.get(ROUTINES_COLLECTION, LIST_LIMIT).await?;
    Ok(Json(ListRoutinesResponse { routines }))
}

/// Validates and stores a new routine.
///
/// `POST /api/routines/add`
#[instrument(skip_all)]
pub async fn add_routine(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AddRoutineResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;

    let routine = validate_routine(&payload)?;
    let record = serde_json::to_value(&routine).map_err(|e| ApiError::Internal(e.to_string()))?;

    state.store.insert(ROUTINES_COLLECTION, record).await?;
    info!(name = %routine.name, "routine added");

    Ok(Json(AddRoutineResponse { success: true }))
}
