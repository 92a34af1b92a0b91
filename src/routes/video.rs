use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::analysis::{self, AnalysisRequest};
use crate::state::AppState;

/// Every outcome of the pipeline, including gateway failure, is a 200 with
/// a structured body; the client never needs non-2xx handling here.
pub async fn analyze(State(state): State<AppState>, Json(req): Json<AnalysisRequest>) -> Response {
    let result = analysis::analyze_video(state.gemini(), state.catalog(), &req).await;
    Json(result).into_response()
}

#[derive(Debug, Deserialize)]
pub struct UploadUrlRequest {
    pub filename: String,
    pub size_bytes: u64,
    pub user_id: String,
}

#[derive(Debug, Serialize)]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub video_id: String,
}

pub async fn upload_url(Json(req): Json<UploadUrlRequest>) -> Response {
    let video_id = Uuid::new_v4().to_string();
    let upload_url = format!("https://storage-service/upload/{video_id}/{}", req.filename);

    tracing::debug!(
        video_id = %video_id,
        user_id = %req.user_id,
        size_bytes = req.size_bytes,
        "issued placeholder upload url"
    );

    Json(UploadUrlResponse {
        upload_url,
        video_id,
    })
    .into_response()
}
