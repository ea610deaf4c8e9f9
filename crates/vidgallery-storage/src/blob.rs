use crate::traits::{BlobStorage, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Upload responses carry the durable public URL assigned by the store.
#[derive(Debug, Deserialize)]
struct PutBlobResponse {
    url: String,
}

/// Blob store client over a token-authenticated HTTP API.
///
/// Writes require the bearer token; reads and HEAD probes go against the
/// public object URLs and need no credential. All requests carry bounded
/// connect/request timeouts so a stalled endpoint cannot hang an ingest call.
#[derive(Clone)]
pub struct HttpBlobStorage {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBlobStorage {
    /// Create a new client.
    ///
    /// `token` may be absent; uploads will then fail with a `ConfigError`
    /// at the point of use.
    pub fn new(
        base_url: String,
        token: Option<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> StorageResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(HttpBlobStorage {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl BlobStorage for HttpBlobStorage {
    async fn upload(
        &self,
        pathname: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let token = self.token.as_deref().ok_or_else(|| {
            StorageError::ConfigError("Blob token not configured on server".to_string())
        })?;

        let size = data.len() as u64;
        let target = format!("{}/{}", self.base_url, pathname);
        let start = std::time::Instant::now();

        let response = self
            .client
            .put(&target)
            .bearer_auth(token)
            .header("x-content-type", content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    pathname = %pathname,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Blob upload failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(
                status = %status,
                pathname = %pathname,
                size_bytes = size,
                "Blob upload rejected"
            );
            return Err(StorageError::UploadFailed(format!(
                "blob store returned {}",
                status
            )));
        }

        let body: PutBlobResponse = response
            .json()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        tracing::info!(
            pathname = %pathname,
            url = %body.url,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Blob upload successful"
        );

        Ok(body.url)
    }

    async fn download(&self, url: &str) -> StorageResult<Bytes> {
        let start = std::time::Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Blob download failed"
            );
            StorageError::DownloadFailed(e.to_string())
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(url.to_string()));
        }
        if !response.status().is_success() {
            return Err(StorageError::DownloadFailed(format!(
                "blob store returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::info!(
            url = %url,
            size_bytes = bytes.len() as u64,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Blob download successful"
        );

        Ok(bytes)
    }

    async fn content_length(&self, url: &str) -> StorageResult<u64> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| StorageError::ProbeFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::ProbeFailed(format!(
                "blob store returned {}",
                response.status()
            )));
        }

        // A missing Content-Length header resolves to 0, same as a failed probe.
        let size = response
            .headers()
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        Ok(size)
    }
}
