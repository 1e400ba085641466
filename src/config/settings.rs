//! Configuration settings for Sammendrag.

use crate::config::Prompts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
    pub captions: CaptionSettings,
    pub audio: AudioSettings,
    pub transcription: TranscriptionSettings,
    pub summary: SummarySettings,
    pub prompts: Prompts,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Root directory for per-request scratch directories.
    pub temp_dir: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            temp_dir: "/tmp/sammendrag".to_string(),
        }
    }
}

/// Settings for the OpenAI-compatible provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub key_env: String,
    /// Timeout for a single API request, in seconds.
    pub request_timeout_seconds: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            key_env: "GROQ_API_KEY".to_string(),
            request_timeout_seconds: 300,
        }
    }
}

/// Caption retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionSettings {
    /// Caption track language codes, in preference order.
    pub languages: Vec<String>,
    /// Timeout for fetching a caption track, in seconds.
    pub fetch_timeout_seconds: u64,
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            languages: vec![
                "en".to_string(),
                "en-US".to_string(),
                "en-GB".to_string(),
            ],
            fetch_timeout_seconds: 30,
        }
    }
}

/// Audio download settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Timeout for a single audio download, in seconds.
    pub download_timeout_seconds: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            download_timeout_seconds: 600,
        }
    }
}

/// Speech-to-text settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    /// Transcription model to use.
    pub model: String,
    /// Language hint passed to the model, if any.
    pub language: Option<String>,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            model: "whisper-large-v3".to_string(),
            language: None,
        }
    }
}

/// Summarization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySettings {
    /// Chat model used to produce the summary.
    pub model: String,
    /// Sampling temperature for the summary.
    pub temperature: f32,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.3,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sammendrag")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded scratch root path.
    pub fn temp_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.temp_dir)
    }
}
