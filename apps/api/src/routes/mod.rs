pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/resumes/analyze/breakdown",
            post(handlers::handle_breakdown),
        )
        .route(
            "/api/v1/recommendations/:category",
            get(handlers::handle_recommendations),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
