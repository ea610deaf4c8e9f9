//! Storage abstraction trait
//!
//! Defines the `BlobStorage` trait the ingestion pipeline depends on, so the
//! blob store can be swapped (or mocked in tests) without touching the
//! pipeline.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Size probe failed: {0}")]
    ProbeFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob store operations used by the ingestion pipeline.
///
/// Objects are addressed by pathname on upload and by their full public URL
/// afterwards (the store assigns the durable URL).
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Upload an object under `pathname` and return its public URL.
    async fn upload(
        &self,
        pathname: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Download the full object body from its public URL.
    async fn download(&self, url: &str) -> StorageResult<Bytes>;

    /// Size in bytes of the object at `url`, via a HEAD probe.
    async fn content_length(&self, url: &str) -> StorageResult<u64>;
}
