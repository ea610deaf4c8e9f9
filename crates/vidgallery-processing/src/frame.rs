//! Frame-extractor adapter over an external command-line transcoder.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Offset into the video the thumbnail frame is sampled at.
pub const THUMBNAIL_OFFSET_SECS: u32 = 2;
pub const THUMBNAIL_WIDTH: u32 = 320;
pub const THUMBNAIL_HEIGHT: u32 = 240;

/// Extracts a single still image from a local video file.
///
/// Failure must never crash the caller; the pipeline absorbs it and persists
/// the record without a thumbnail.
#[async_trait]
pub trait FrameExtractor: Send + Sync {
    async fn extract_frame(&self, video: &Path, output: &Path) -> Result<()>;
}

/// FFmpeg-backed frame extraction.
#[derive(Clone, Debug)]
pub struct FfmpegFrameExtractor {
    ffmpeg_path: String,
}

impl FfmpegFrameExtractor {
    pub fn new(ffmpeg_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    /// Check whether the ffmpeg binary can be invoked at all. Used at startup
    /// to fall back to processing-disabled mode when the dependency is
    /// missing.
    pub async fn probe_available(&self) -> bool {
        Command::new(&self.ffmpeg_path)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl FrameExtractor for FfmpegFrameExtractor {
    async fn extract_frame(&self, video: &Path, output: &Path) -> Result<()> {
        let start = std::time::Instant::now();

        let result = Command::new(&self.ffmpeg_path)
            .arg("-ss")
            .arg(THUMBNAIL_OFFSET_SECS.to_string())
            .arg("-i")
            .arg(video)
            .arg("-frames:v")
            .arg("1")
            .arg("-vf")
            .arg(format!("scale={}:{}", THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT))
            .arg("-y")
            .arg(output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("Failed to spawn ffmpeg at '{}'", self.ffmpeg_path))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            // Keep only the tail; ffmpeg banners are long and the error is last.
            let tail: String = stderr
                .lines()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::bail!("ffmpeg exited with {}: {}", result.status, tail);
        }

        tracing::debug!(
            video = %video.display(),
            output = %output.display(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Thumbnail frame extracted"
        );

        Ok(())
    }
}
