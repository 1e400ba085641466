//! Whisper transcription over the OpenAI-compatible audio API.

use super::SpeechToText;
use crate::config::{ApiSettings, TranscriptionSettings};
use crate::error::{Result, SammendragError};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{AudioInput, CreateTranscriptionRequestArgs};
use async_openai::Client;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, instrument};

/// Whisper-based transcriber.
pub struct WhisperTranscriber {
    client: Client<OpenAIConfig>,
    model: String,
    language: Option<String>,
}

impl WhisperTranscriber {
    pub fn new(api: &ApiSettings, settings: &TranscriptionSettings) -> Self {
        Self {
            client: create_client(api),
            model: settings.model.clone(),
            language: settings.language.clone(),
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperTranscriber {
    #[instrument(skip(self), fields(audio_path = %audio_path.display()))]
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        debug!("Transcribing audio file");

        let file_bytes = tokio::fs::read(audio_path).await?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.m4a")
            .to_string();

        let mut request_builder = CreateTranscriptionRequestArgs::default();
        request_builder
            .file(AudioInput::from_vec_u8(file_name, file_bytes))
            .model(&self.model);

        if let Some(lang) = &self.language {
            request_builder.language(lang);
        }

        let request = request_builder
            .build()
            .map_err(|e| SammendragError::Transcription(format!("Failed to build request: {e}")))?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| SammendragError::OpenAI(format!("Whisper API error: {e}")))?;

        let text = response.text.trim().to_string();
        debug!("Transcribed {} chars", text.len());
        Ok(text)
    }
}
