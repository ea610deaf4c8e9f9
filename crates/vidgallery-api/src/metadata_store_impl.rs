//! Adapter wiring the video repository into the pipeline's persistence seam.

use async_trait::async_trait;
use vidgallery_core::models::{NewVideoRecord, VideoRecord};
use vidgallery_core::AppError;
use vidgallery_db::VideoRepository;
use vidgallery_processing::MetadataStore;

/// Newtype adapter; `MetadataStore` and `VideoRepository` live in different
/// crates, so the impl needs a local type.
pub struct VideoMetadataStore(pub VideoRepository);

#[async_trait]
impl MetadataStore for VideoMetadataStore {
    async fn insert_video(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError> {
        self.0.insert(record).await
    }
}
