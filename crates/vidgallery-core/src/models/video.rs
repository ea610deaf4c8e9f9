use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted gallery video. One record per successfully ingested video.
///
/// Wire field names are camelCase to match the public JSON contract.
/// `video_url` is always non-empty for a persisted record; `thumbnail_url`
/// and `size` are best-effort (empty string / 0 when resolution was skipped
/// or failed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: Uuid,
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub content_type: String,
    pub size: i64,
    pub width: i32,
    pub height: i32,
    pub upload_date: DateTime<Utc>,
}

/// Insert shape for a video record. The repository assigns `id` and
/// `upload_date` at persistence time.
#[derive(Debug, Clone)]
pub struct NewVideoRecord {
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub content_type: String,
    pub size: i64,
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> VideoRecord {
        VideoRecord {
            id: Uuid::new_v4(),
            title: "clip".to_string(),
            video_url: "https://store/clip.mp4".to_string(),
            thumbnail_url: "https://store/clip-thumb.jpg".to_string(),
            content_type: "video/mp4".to_string(),
            size: 12345,
            width: 1920,
            height: 1080,
            upload_date: Utc::now(),
        }
    }

    /// The JSON contract uses camelCase keys.
    #[test]
    fn test_record_serializes_camel_case() {
        let json = serde_json::to_value(sample_record()).expect("serialize");
        assert!(json.get("videoUrl").is_some());
        assert!(json.get("thumbnailUrl").is_some());
        assert!(json.get("contentType").is_some());
        assert!(json.get("uploadDate").is_some());
        assert!(json.get("video_url").is_none());
    }

    #[test]
    fn test_record_round_trips() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let back: VideoRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, record);
    }
}
