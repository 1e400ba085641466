//! Error types for Sammendrag.

use thiserror::Error;

/// Library-level error type for Sammendrag operations.
///
/// The `Display` form of each variant is what the HTTP layer surfaces to
/// callers in the `detail` field of a failure response.
#[derive(Error, Debug)]
pub enum SammendragError {
    #[error("Caption retrieval failed: {0}")]
    Captions(String),

    #[error("Audio download failed: {0}")]
    AudioDownload(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Sammendrag operations.
pub type Result<T> = std::result::Result<T, SammendragError>;
