pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::studio::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Studio API — one handler per user action; all form state arrives
        // explicitly with the request.
        .route(
            "/api/v1/resumes/optimize",
            post(handlers::handle_optimize),
        )
        .route("/api/v1/resumes/export", post(handlers::handle_export))
        .with_state(state)
}
