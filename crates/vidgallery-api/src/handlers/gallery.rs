//! Gallery query handlers.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use vidgallery_core::AppError;

/// List all videos, newest first.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let videos = state.videos.list_all().await?;
    Ok(Json(serde_json::json!({ "videos": videos })))
}

/// Fetch a single video by id. Ill-formed ids are a client error, not a
/// lookup miss.
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::InvalidInput("Invalid video id".to_string()))?;

    let video = state
        .videos
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    Ok(Json(serde_json::json!({ "video": video })))
}
