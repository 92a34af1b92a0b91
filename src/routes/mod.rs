mod exercises;
mod health;
mod video;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::live))
        .route("/api/exercises", get(exercises::list_exercises))
        .route("/api/exercise-details", get(exercises::exercise_details))
        .route("/api/video/analyze", post(video::analyze))
        .route("/api/video/upload-url", post(video::upload_url))
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    AppError::not_found("route not found").into_response()
}
