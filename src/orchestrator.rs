//! Request orchestration: captions first, audio transcription second.
//!
//! Coordinates the caption lookup, the audio fallback, and the summarizer
//! for one request at a time. Requests share nothing; two concurrent
//! requests for the same video repeat the whole pipeline independently.

use crate::audio::{AudioDownloader, YtDlp};
use crate::captions::{CaptionOutcome, CaptionSource, YoutubeCaptions};
use crate::config::Settings;
use crate::error::{Result, SammendragError};
use crate::summarize::{BulletSummarizer, Summarizer};
use crate::transcription::{SpeechToText, WhisperTranscriber};
use crate::video::extract_video_id;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Which acquisition path produced the summarized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    Transcript,
    Audio,
}

impl std::fmt::Display for SummarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarySource::Transcript => write!(f, "transcript"),
            SummarySource::Audio => write!(f, "audio"),
        }
    }
}

/// Result of summarizing one video.
#[derive(Debug, Clone)]
pub struct VideoSummary {
    /// Bullet-point summary text.
    pub summary: String,
    /// Acquisition path that produced the input text.
    pub source: SummarySource,
}

/// The main orchestrator for the summarization pipeline.
pub struct Orchestrator {
    captions: Arc<dyn CaptionSource>,
    downloader: Arc<dyn AudioDownloader>,
    transcriber: Arc<dyn SpeechToText>,
    summarizer: Arc<dyn Summarizer>,
    temp_dir: PathBuf,
}

impl Orchestrator {
    /// Create a new orchestrator with production components.
    pub fn new(settings: Settings) -> Result<Self> {
        let captions = Arc::new(YoutubeCaptions::new(&settings.captions)?);
        let downloader = Arc::new(YtDlp::new(&settings.audio));
        let transcriber = Arc::new(WhisperTranscriber::new(
            &settings.api,
            &settings.transcription,
        ));
        let summarizer = Arc::new(BulletSummarizer::new(
            &settings.api,
            &settings.summary,
            settings.prompts.clone(),
        ));

        Self::with_components(settings, captions, downloader, transcriber, summarizer)
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        settings: Settings,
        captions: Arc<dyn CaptionSource>,
        downloader: Arc<dyn AudioDownloader>,
        transcriber: Arc<dyn SpeechToText>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Result<Self> {
        let temp_dir = settings.temp_dir();
        std::fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            captions,
            downloader,
            transcriber,
            summarizer,
            temp_dir,
        })
    }

    /// Summarize a video, preferring an existing caption track.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn summarize_video(&self, url: &str) -> Result<VideoSummary> {
        let video_id = extract_video_id(url);
        info!("Processing video {}", video_id);

        match self.captions.fetch(&video_id).await {
            CaptionOutcome::Found(text) => {
                info!("Using caption track ({} chars)", text.len());
                let summary = self.summarizer.summarize(&text).await?;
                Ok(VideoSummary {
                    summary,
                    source: SummarySource::Transcript,
                })
            }
            CaptionOutcome::NotAvailable => {
                info!("No caption track available, falling back to audio transcription");
                self.summarize_from_audio(url).await
            }
            CaptionOutcome::ProviderError(detail) => {
                // Provider faults are not absence; only absence triggers the fallback.
                warn!("Caption provider error: {}", detail);
                Err(SammendragError::Captions(detail))
            }
        }
    }

    /// The fallback path: download audio, transcribe it, summarize the text.
    async fn summarize_from_audio(&self, url: &str) -> Result<VideoSummary> {
        // The guard deletes the scratch directory on every exit path,
        // including cancellation.
        let scratch = tempfile::Builder::new()
            .prefix("sammendrag-")
            .tempdir_in(&self.temp_dir)?;

        let audio_path = self.downloader.download(url, scratch.path()).await?;
        let text = self.transcriber.transcribe(&audio_path).await?;

        drop(scratch);

        let summary = self.summarizer.summarize(&text).await?;
        Ok(VideoSummary {
            summary,
            source: SummarySource::Audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticCaptions(CaptionOutcome);

    #[async_trait]
    impl CaptionSource for StaticCaptions {
        async fn fetch(&self, _video_id: &str) -> CaptionOutcome {
            self.0.clone()
        }
    }

    struct CountingDownloader {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingDownloader {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl AudioDownloader for CountingDownloader {
        async fn download(&self, _url: &str, dest_dir: &Path) -> Result<PathBuf> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SammendragError::AudioDownload("yt-dlp failed: boom".into()));
            }
            let path = dest_dir.join("audio.m4a");
            std::fs::write(&path, b"fake audio")?;
            Ok(path)
        }
    }

    struct StaticTranscriber {
        text: Option<String>,
    }

    #[async_trait]
    impl SpeechToText for StaticTranscriber {
        async fn transcribe(&self, audio_path: &Path) -> Result<String> {
            assert!(audio_path.exists(), "audio file must exist when transcribing");
            match &self.text {
                Some(text) => Ok(text.clone()),
                None => Err(SammendragError::Transcription("model unavailable".into())),
            }
        }
    }

    struct EchoSummarizer;

    #[async_trait]
    impl Summarizer for EchoSummarizer {
        async fn summarize(&self, text: &str) -> Result<String> {
            Ok(format!("- {}", text))
        }
    }

    fn orchestrator_with(
        outcome: CaptionOutcome,
        downloader: Arc<CountingDownloader>,
        transcriber: StaticTranscriber,
        temp_dir: &Path,
    ) -> Orchestrator {
        let mut settings = Settings::default();
        settings.general.temp_dir = temp_dir.to_string_lossy().into_owned();

        Orchestrator::with_components(
            settings,
            Arc::new(StaticCaptions(outcome)),
            downloader,
            Arc::new(transcriber),
            Arc::new(EchoSummarizer),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn caption_track_skips_the_downloader() {
        let temp = tempfile::tempdir().unwrap();
        let downloader = Arc::new(CountingDownloader::new(false));
        let orchestrator = orchestrator_with(
            CaptionOutcome::Found("captioned words".into()),
            downloader.clone(),
            StaticTranscriber { text: None },
            temp.path(),
        );

        let result = orchestrator
            .summarize_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(result.source, SummarySource::Transcript);
        assert_eq!(result.summary, "- captioned words");
        assert_eq!(downloader.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_captions_fall_back_to_audio() {
        let temp = tempfile::tempdir().unwrap();
        let downloader = Arc::new(CountingDownloader::new(false));
        let orchestrator = orchestrator_with(
            CaptionOutcome::NotAvailable,
            downloader.clone(),
            StaticTranscriber {
                text: Some("spoken words".into()),
            },
            temp.path(),
        );

        let result = orchestrator
            .summarize_video("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(result.source, SummarySource::Audio);
        assert_eq!(result.summary, "- spoken words");
        assert_eq!(downloader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn download_failure_is_not_retried() {
        let temp = tempfile::tempdir().unwrap();
        let downloader = Arc::new(CountingDownloader::new(true));
        let orchestrator = orchestrator_with(
            CaptionOutcome::NotAvailable,
            downloader.clone(),
            StaticTranscriber { text: None },
            temp.path(),
        );

        let err = orchestrator
            .summarize_video("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert!(!err.to_string().is_empty());
        assert_eq!(downloader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn scratch_directory_is_removed_when_transcription_fails() {
        let temp = tempfile::tempdir().unwrap();
        let downloader = Arc::new(CountingDownloader::new(false));
        let orchestrator = orchestrator_with(
            CaptionOutcome::NotAvailable,
            downloader,
            StaticTranscriber { text: None },
            temp.path(),
        );

        let err = orchestrator
            .summarize_video("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap_err();
        assert!(matches!(err, SammendragError::Transcription(_)));

        let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(leftovers, 0, "scratch directory must be deleted on failure");
    }

    #[tokio::test]
    async fn scratch_directory_is_removed_on_success() {
        let temp = tempfile::tempdir().unwrap();
        let downloader = Arc::new(CountingDownloader::new(false));
        let orchestrator = orchestrator_with(
            CaptionOutcome::NotAvailable,
            downloader,
            StaticTranscriber {
                text: Some("spoken words".into()),
            },
            temp.path(),
        );

        orchestrator
            .summarize_video("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();

        let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn provider_error_fails_without_downloading() {
        let temp = tempfile::tempdir().unwrap();
        let downloader = Arc::new(CountingDownloader::new(false));
        let orchestrator = orchestrator_with(
            CaptionOutcome::ProviderError("connection reset".into()),
            downloader.clone(),
            StaticTranscriber { text: None },
            temp.path(),
        );

        let err = orchestrator
            .summarize_video("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(downloader.calls.load(Ordering::SeqCst), 0);
    }
}
