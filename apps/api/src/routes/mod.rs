pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/score", post(handlers::handle_score))
        .route(
            "/api/v1/extract/resume",
            post(handlers::handle_extract_resume),
        )
        .route("/api/v1/extract/jd", post(handlers::handle_extract_jd))
        .layer(body_limit)
        .with_state(state)
}
