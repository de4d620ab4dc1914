//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /api/routines/get
//!   POST   /api/routines/add

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

use tracing::info;

/// Bind `bind` and serve the API until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state)).await
}
