//! Video ingestion pipeline: validate the upload reference, optionally
//! materialize the video locally and extract a thumbnail, resolve size and
//! content type, persist the metadata record, and clean up scratch files on
//! every exit path.
//!
//! Only two failures cross this boundary: invalid input (before any I/O) and
//! a failed metadata insert. Every other step is best-effort — it logs,
//! degrades the optional fields, and the record persists anyway.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use vidgallery_core::models::{NewVideoRecord, VideoRecord};
use vidgallery_core::{media, AppError};
use vidgallery_storage::BlobStorage;

use crate::frame::FrameExtractor;
use crate::scratch::ScratchArea;

/// Metadata persistence seam. Implemented by the video repository; mocked in
/// pipeline tests.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn insert_video(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError>;
}

/// Reference to an already-uploaded video blob, as received from the upload
/// completion call (or built directly for reprocessing).
#[derive(Debug, Clone, Default)]
pub struct VideoReference {
    pub video_url: String,
    pub video_pathname: String,
    pub thumbnail_url: Option<String>,
    pub thumbnail_pathname: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Pipeline behavior toggles, resolved once at startup.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// When false the pipeline never downloads or runs the frame extractor;
    /// size comes from a remote probe and the thumbnail is the placeholder.
    pub local_processing_enabled: bool,
    /// Thumbnail URL recorded when processing is skipped. May be empty.
    pub placeholder_thumbnail_url: String,
    pub scratch_dir: std::path::PathBuf,
}

/// The ingestion pipeline. One instance per process; each `ingest` call is an
/// independent unit of work with its own scratch files.
pub struct IngestPipeline {
    blob: Arc<dyn BlobStorage>,
    store: Arc<dyn MetadataStore>,
    extractor: Arc<dyn FrameExtractor>,
    scratch: ScratchArea,
    config: PipelineConfig,
}

impl IngestPipeline {
    pub fn new(
        blob: Arc<dyn BlobStorage>,
        store: Arc<dyn MetadataStore>,
        extractor: Arc<dyn FrameExtractor>,
        config: PipelineConfig,
    ) -> anyhow::Result<Self> {
        let scratch = ScratchArea::new(&config.scratch_dir)?;
        Ok(Self {
            blob,
            store,
            extractor,
            scratch,
            config,
        })
    }

    /// Ingest one uploaded video: resolve metadata, generate a thumbnail when
    /// possible, and persist the record.
    ///
    /// Fails only on missing required fields (before any I/O) or on the
    /// metadata insert itself. Scratch files are released before either
    /// error propagates.
    pub async fn ingest(&self, reference: VideoReference) -> Result<VideoRecord, AppError> {
        if reference.video_url.trim().is_empty() || reference.video_pathname.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Missing required video parameters".to_string(),
            ));
        }

        let title = media::title_for(&reference.video_pathname).to_string();
        let content_type = media::content_type_for(&reference.video_pathname).to_string();

        let (size, thumbnail_url) = match reference.thumbnail_url.as_deref() {
            // Caller already has a thumbnail (browser-side generation or a
            // companion upload); skip all local processing.
            Some(url) if !url.is_empty() => (
                self.resolve_size_remote(&reference.video_url).await,
                url.to_string(),
            ),
            _ if self.config.local_processing_enabled => self.process_locally(&reference).await,
            _ => (
                self.resolve_size_remote(&reference.video_url).await,
                self.config.placeholder_thumbnail_url.clone(),
            ),
        };

        let record = NewVideoRecord {
            title,
            video_url: reference.video_url.clone(),
            thumbnail_url,
            content_type,
            size,
            width: reference.width.unwrap_or(0),
            height: reference.height.unwrap_or(0),
        };

        tracing::info!(
            video_url = %record.video_url,
            size_bytes = record.size,
            has_thumbnail = !record.thumbnail_url.is_empty(),
            "Persisting video metadata"
        );

        self.store.insert_video(record).await
    }

    /// Download the video into scratch, measure it, and extract/upload a
    /// thumbnail. Returns whatever subset of {size, thumbnail URL} was
    /// actually obtained; never fails.
    async fn process_locally(&self, reference: &VideoReference) -> (i64, String) {
        let video_file = self.scratch.acquire(&reference.video_pathname);

        let downloaded = match self.blob.download(&reference.video_url).await {
            Ok(bytes) => match tokio::fs::write(video_file.path(), &bytes).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        path = %video_file.path().display(),
                        "Failed to write video to scratch file"
                    );
                    false
                }
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    url = %reference.video_url,
                    "Video download failed, falling back to remote size probe"
                );
                false
            }
        };

        if !downloaded {
            video_file.release().await;
            return (
                self.resolve_size_remote(&reference.video_url).await,
                String::new(),
            );
        }

        // The local copy reflects actual downloaded bytes, so it wins over
        // any remote probe.
        let size = match tokio::fs::metadata(video_file.path()).await {
            Ok(meta) => meta.len() as i64,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to stat downloaded video, size defaults to 0");
                0
            }
        };

        let thumbnail_url = self
            .make_thumbnail(&reference.video_pathname, video_file.path())
            .await;

        video_file.release().await;
        (size, thumbnail_url)
    }

    /// Extract a frame and upload it under `{base}-thumb.jpg`. Returns the
    /// thumbnail URL, or an empty string on any failure.
    async fn make_thumbnail(&self, video_pathname: &str, local_video: &Path) -> String {
        let thumb_pathname = media::thumbnail_pathname_for(video_pathname);
        let thumb_file = self.scratch.acquire(&thumb_pathname);

        let result: anyhow::Result<String> = async {
            self.extractor
                .extract_frame(local_video, thumb_file.path())
                .await?;
            let data = tokio::fs::read(thumb_file.path()).await?;
            let url = self.blob.upload(&thumb_pathname, "image/jpeg", data).await?;
            Ok(url)
        }
        .await;

        thumb_file.release().await;

        match result {
            Ok(url) => {
                tracing::info!(thumbnail_url = %url, "Thumbnail generated and uploaded");
                url
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    video = %video_pathname,
                    "Thumbnail generation failed, record persists without one"
                );
                String::new()
            }
        }
    }

    /// HEAD-probe the blob store for the video size. Best-effort: any failure
    /// resolves to 0.
    async fn resolve_size_remote(&self, url: &str) -> i64 {
        match self.blob.content_length(url).await {
            Ok(size) => size as i64,
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "Size probe failed, size defaults to 0");
                0
            }
        }
    }
}
