//! Upload completion handler: the client has already pushed the video blob
//! to storage and now reports it for ingestion.

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use vidgallery_processing::VideoReference;

/// Body of `POST /api/upload/process`. Everything beyond the video URL and
/// pathname is optional; the pipeline fills in what the client omits.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessUploadRequest {
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub video_pathname: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub thumbnail_pathname: Option<String>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

pub async fn process_upload(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<ProcessUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    tracing::info!(
        video_url = %body.video_url,
        pathname = %body.video_pathname,
        has_thumbnail = body.thumbnail_url.is_some(),
        "Processing uploaded video"
    );

    let record = state
        .pipeline
        .ingest(VideoReference {
            video_url: body.video_url,
            video_pathname: body.video_pathname,
            thumbnail_url: body.thumbnail_url,
            thumbnail_pathname: body.thumbnail_pathname,
            width: body.width,
            height: body.height,
        })
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": record,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_camel_case_keys() {
        let body: ProcessUploadRequest = serde_json::from_str(
            r#"{
                "videoUrl": "https://store/a.mp4",
                "videoPathname": "a.mp4",
                "thumbnailUrl": "https://store/a-thumb.jpg",
                "width": 640,
                "height": 480
            }"#,
        )
        .expect("deserialize");

        assert_eq!(body.video_url, "https://store/a.mp4");
        assert_eq!(body.video_pathname, "a.mp4");
        assert_eq!(body.thumbnail_url.as_deref(), Some("https://store/a-thumb.jpg"));
        assert_eq!(body.thumbnail_pathname, None);
        assert_eq!((body.width, body.height), (Some(640), Some(480)));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        // Validation of emptiness happens in the pipeline, not in serde.
        let body: ProcessUploadRequest = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(body.video_url, "");
        assert_eq!(body.video_pathname, "");
        assert_eq!(body.thumbnail_url, None);
    }
}
