//! Scoped temp-file lifecycle for pipeline runs.
//!
//! Many ingest calls may be in flight at once, all sharing one scratch
//! directory. Acquisition hands out uniquely-suffixed paths so concurrent
//! runs never collide; release removes the file on every exit path,
//! including panics and early returns (via `Drop`). The directory itself is
//! created once and never deleted here.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Shared scratch directory for pipeline-local files.
#[derive(Clone, Debug)]
pub struct ScratchArea {
    dir: PathBuf,
}

impl ScratchArea {
    /// Open the scratch directory, creating it if absent (idempotent).
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reserve a uniquely-named path for `filename` inside the scratch
    /// directory. Only the final path component of `filename` is used, and a
    /// per-call token is inserted before the extension, so concurrent runs
    /// over the same upload cannot collide.
    ///
    /// The file itself is not created; the caller writes it. The returned
    /// guard removes whatever ends up at the path when released or dropped.
    pub fn acquire(&self, filename: &str) -> ScratchFile {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("blob");
        let (stem, ext) = match name.rfind('.') {
            Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
            _ => (name, ""),
        };

        // Unique enough for intra-process overlap; global uniqueness is not
        // required.
        let token = Uuid::new_v4().simple().to_string();
        let path = self.dir.join(format!("{}-{}{}", stem, &token[..8], ext));

        ScratchFile {
            path,
            released: false,
        }
    }
}

/// Guard for a single scratch file, owned by exactly one pipeline run.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    released: bool,
}

impl ScratchFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file. Removal failure is logged, never escalated; a file
    /// that was never written is not an error.
    pub async fn release(mut self) {
        self.released = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove scratch file"
                );
            }
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove scratch file on drop"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_is_idempotent() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = tmp.path().join("scratch");
        ScratchArea::new(&dir).expect("first create");
        ScratchArea::new(&dir).expect("second create");
        assert!(dir.is_dir());
    }

    #[test]
    fn test_acquire_paths_are_unique_per_call() {
        let tmp = TempDir::new().expect("tempdir");
        let area = ScratchArea::new(tmp.path()).expect("scratch area");

        let a = area.acquire("clip.mp4");
        let b = area.acquire("clip.mp4");
        assert_ne!(a.path(), b.path());

        let name = a.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("clip-"));
        assert!(name.ends_with(".mp4"));
    }

    #[test]
    fn test_acquire_ignores_directory_components() {
        let tmp = TempDir::new().expect("tempdir");
        let area = ScratchArea::new(tmp.path()).expect("scratch area");

        let file = area.acquire("../../etc/passwd.mp4");
        assert_eq!(file.path().parent(), Some(tmp.path()));
    }

    #[tokio::test]
    async fn test_release_removes_file() {
        let tmp = TempDir::new().expect("tempdir");
        let area = ScratchArea::new(tmp.path()).expect("scratch area");

        let file = area.acquire("clip.mp4");
        tokio::fs::write(file.path(), b"data").await.expect("write");
        let path = file.path().to_path_buf();

        file.release().await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_release_of_unwritten_file_is_quiet() {
        let tmp = TempDir::new().expect("tempdir");
        let area = ScratchArea::new(tmp.path()).expect("scratch area");

        area.acquire("clip.mp4").release().await;
    }

    #[test]
    fn test_drop_removes_file_on_early_exit() {
        let tmp = TempDir::new().expect("tempdir");
        let area = ScratchArea::new(tmp.path()).expect("scratch area");

        let path = {
            let file = area.acquire("clip.mp4");
            std::fs::write(file.path(), b"data").expect("write");
            file.path().to_path_buf()
            // guard dropped without release()
        };
        assert!(!path.exists());
    }
}
