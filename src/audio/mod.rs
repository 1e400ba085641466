//! Audio acquisition for the fallback path.

mod downloader;

pub use downloader::YtDlp;

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Trait for audio downloaders.
///
/// A downloader writes into a caller-provided scratch directory and never
/// deletes anything; the caller owns the directory's lifetime.
#[async_trait]
pub trait AudioDownloader: Send + Sync {
    /// Download the audio stream for a video into `dest_dir` and return the
    /// path of the produced file.
    ///
    /// Takes the original video reference rather than a normalized
    /// identifier; the underlying tool accepts raw URLs.
    async fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf>;
}
