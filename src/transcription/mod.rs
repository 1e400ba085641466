//! Speech-to-text transcription.

mod whisper;

pub use whisper::WhisperTranscriber;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for speech-to-text providers.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe an audio file to plain text.
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
