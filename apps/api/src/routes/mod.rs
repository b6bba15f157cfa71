pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/layout", post(handlers::handle_layout))
        .route(
            "/api/v1/resumes/:id/layout",
            get(handlers::handle_stored_layout),
        )
        .with_state(state)
}
