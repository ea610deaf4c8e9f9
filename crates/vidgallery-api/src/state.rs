//! Shared application state.

use std::sync::Arc;

use vidgallery_core::Config;
use vidgallery_db::VideoRepository;
use vidgallery_processing::IngestPipeline;

/// State handed to every handler. Cheap to clone behind the `Arc` axum
/// wraps it in.
pub struct AppState {
    pub config: Config,
    pub videos: VideoRepository,
    pub pipeline: Arc<IngestPipeline>,
}
