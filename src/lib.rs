//! Sammendrag - Video Summarization Service
//!
//! A single-endpoint HTTP service that turns a video URL into a bullet-point
//! summary of its spoken content.
//!
//! The name "Sammendrag" is the Norwegian word for "summary."
//!
//! # Overview
//!
//! For each request the service:
//! - Normalizes the video reference to a canonical identifier
//! - Fetches an existing caption track when one is available
//! - Falls back to downloading the audio and transcribing it when not
//! - Summarizes whichever text was obtained with an LLM
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `video` - Video reference normalization
//! - `captions` - Caption track retrieval
//! - `audio` - Audio download via yt-dlp
//! - `transcription` - Speech-to-text transcription
//! - `summarize` - LLM summarization
//! - `orchestrator` - Caption-first / audio-fallback coordination
//! - `server` - HTTP API surface
//!
//! # Example
//!
//! ```rust,no_run
//! use sammendrag::config::Settings;
//! use sammendrag::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     let result = orchestrator
//!         .summarize_video("https://youtu.be/dQw4w9WgXcQ")
//!         .await?;
//!     println!("[{}] {}", result.source, result.summary);
//!
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod captions;
pub mod config;
pub mod error;
pub mod openai;
pub mod orchestrator;
pub mod server;
pub mod summarize;
pub mod transcription;
pub mod video;

pub use error::{Result, SammendragError};
