use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all refmirror endpoints.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_payload_size;
    Router::new()
        .route("/push/github", post(handler::github_push))
        .route("/health", get(handler::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
