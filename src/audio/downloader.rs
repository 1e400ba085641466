//! yt-dlp based audio download.

use super::AudioDownloader;
use crate::config::AudioSettings;
use crate::error::{Result, SammendragError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, instrument};

/// Audio downloader shelling out to yt-dlp.
pub struct YtDlp {
    download_timeout: Duration,
}

impl YtDlp {
    pub fn new(settings: &AudioSettings) -> Self {
        Self {
            download_timeout: Duration::from_secs(settings.download_timeout_seconds),
        }
    }
}

#[async_trait]
impl AudioDownloader for YtDlp {
    #[instrument(skip(self, dest_dir), fields(url = %url))]
    async fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
        info!("Downloading audio");

        let template = dest_dir.join("audio.%(ext)s");

        let command = Command::new("yt-dlp")
            .arg("--format").arg("bestaudio/best")
            .arg("--output").arg(template.to_str().unwrap_or_default())
            .arg("--no-playlist")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let result = match tokio::time::timeout(self.download_timeout, command).await {
            Ok(r) => r,
            Err(_) => {
                return Err(SammendragError::AudioDownload(format!(
                    "yt-dlp timed out after {}s",
                    self.download_timeout.as_secs()
                )));
            }
        };

        let output = match result {
            Ok(o) => o,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SammendragError::ToolNotFound("yt-dlp".into()));
            }
            Err(e) => {
                return Err(SammendragError::AudioDownload(format!(
                    "yt-dlp execution failed: {e}"
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SammendragError::AudioDownload(format!(
                "yt-dlp failed: {stderr}"
            )));
        }

        find_audio_file(dest_dir)
    }
}

/// Locates the downloaded audio file inside the scratch directory.
fn find_audio_file(dir: &Path) -> Result<PathBuf> {
    // Common audio formats that yt-dlp may produce
    for ext in &["m4a", "opus", "webm", "mp3", "ogg"] {
        let candidate = dir.join(format!("audio.{}", ext));
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    // Fallback: scan the directory for the output template prefix
    let entries = std::fs::read_dir(dir)
        .map_err(|e| SammendragError::AudioDownload(format!("Cannot read scratch directory: {e}")))?;

    for entry in entries.flatten() {
        if entry.file_name().to_string_lossy().starts_with("audio.") {
            return Ok(entry.path());
        }
    }

    Err(SammendragError::AudioDownload(
        "Audio file not found after download".into(),
    ))
}
