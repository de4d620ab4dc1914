//! Router assembly.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete router with CORS and request tracing.
// TODO: require authentication on /api/routines before exposing it beyond a trusted network.
pub fn build_router(state: AppState) -> Router {
    let routines = Router::new()
        .route("/get", get(handlers::routines::list_routines))
        .route("/add", post(handlers::routines::add_routine));

    Router::new()
        .nest("/api/routines", routines)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
