//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;

use crate::metadata_store_impl::VideoMetadataStore;
use crate::state::AppState;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use vidgallery_core::Config;
use vidgallery_db::VideoRepository;
use vidgallery_processing::{FfmpegFrameExtractor, IngestPipeline, PipelineConfig};
use vidgallery_storage::HttpBlobStorage;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let pool = database::setup_database(&config).await?;
    let videos = VideoRepository::new(pool);

    let blob = HttpBlobStorage::new(
        config.blob_base_url.clone(),
        config.blob_token.clone(),
        Duration::from_secs(config.http_connect_timeout_secs),
        Duration::from_secs(config.http_request_timeout_secs),
    )?;

    // Local processing needs a working ffmpeg; without one the pipeline runs
    // in the degraded probe-and-placeholder mode.
    let extractor = FfmpegFrameExtractor::new(config.ffmpeg_path.clone());
    let local_processing_enabled = if config.local_processing_enabled {
        let available = extractor.probe_available().await;
        if !available {
            tracing::warn!(
                ffmpeg_path = %config.ffmpeg_path,
                "ffmpeg not available, disabling local video processing"
            );
        }
        available
    } else {
        false
    };

    let pipeline = IngestPipeline::new(
        Arc::new(blob),
        Arc::new(VideoMetadataStore(videos.clone())),
        Arc::new(extractor),
        PipelineConfig {
            local_processing_enabled,
            placeholder_thumbnail_url: config.placeholder_thumbnail_url.clone(),
            scratch_dir: config.scratch_dir.clone(),
        },
    )?;

    let state = Arc::new(AppState {
        config: config.clone(),
        videos,
        pipeline: Arc::new(pipeline),
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
