pub mod health;
pub mod score;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/score", post(score::handle_score_upload))
        .route(
            "/api/v1/resumes/score-text",
            post(score::handle_score_text),
        )
        .layer(body_limit)
        .with_state(state)
}
