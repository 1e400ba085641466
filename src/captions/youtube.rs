//! YouTube caption source implementation.

use super::{CaptionOutcome, CaptionSource};
use crate::config::CaptionSettings;
use crate::error::{Result, SammendragError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Caption source backed by YouTube's platform caption tracks.
pub struct YoutubeCaptions {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    fetch_timeout: Duration,
}

impl YoutubeCaptions {
    pub fn new(settings: &CaptionSettings) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            SammendragError::Captions(format!("failed to create caption client: {e}"))
        })?;

        Ok(Self {
            api,
            languages: settings.languages.clone(),
            fetch_timeout: Duration::from_secs(settings.fetch_timeout_seconds),
        })
    }
}

#[async_trait]
impl CaptionSource for YoutubeCaptions {
    #[instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch(&self, video_id: &str) -> CaptionOutcome {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = match tokio::time::timeout(
            self.fetch_timeout,
            self.api.fetch_transcript(video_id, &languages, false),
        )
        .await
        {
            Ok(Ok(transcript)) => transcript,
            Ok(Err(e)) => return classify_failure(&e.to_string()),
            Err(_) => {
                return CaptionOutcome::ProviderError(format!(
                    "caption fetch timed out after {}s",
                    self.fetch_timeout.as_secs()
                ))
            }
        };

        // Space-joined segment texts, empty segments dropped
        let text = fetched
            .snippets
            .iter()
            .map(|s| s.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            debug!("Caption track contained no text");
            return CaptionOutcome::NotAvailable;
        }

        debug!("Fetched caption track ({} chars)", text.len());
        CaptionOutcome::Found(text)
    }
}

/// Map a provider failure onto the caption outcome.
///
/// The provider reports absence (no track for the requested languages,
/// captions disabled) through errors; those map to `NotAvailable` so the
/// orchestrator falls back instead of failing the request.
fn classify_failure(message: &str) -> CaptionOutcome {
    let lower = message.to_lowercase();
    if lower.contains("no transcript") || lower.contains("disabled") {
        warn!("No usable caption track: {message}");
        CaptionOutcome::NotAvailable
    } else {
        warn!("Caption provider error: {message}");
        CaptionOutcome::ProviderError(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_messages_map_to_not_available() {
        assert_eq!(
            classify_failure("No transcripts were found for any of the requested language codes"),
            CaptionOutcome::NotAvailable
        );
        assert_eq!(
            classify_failure("Subtitles are disabled for this video"),
            CaptionOutcome::NotAvailable
        );
    }

    #[test]
    fn other_failures_are_provider_errors() {
        let outcome = classify_failure("request to youtube.com failed: connection reset");
        assert!(matches!(
            outcome,
            CaptionOutcome::ProviderError(msg) if msg.contains("connection reset")
        ));
    }
}
