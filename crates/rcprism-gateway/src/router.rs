//! Axum router wiring.

use axum::{routing::get, Router};

use crate::{app_state::AppState, transport::http};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::index))
        .route("/lookup", get(http::lookup))
        .route("/metrics", get(http::metrics))
        .with_state(state)
}
