//! Caption track retrieval.
//!
//! Provides a trait-based interface so the caption provider can be swapped
//! out in tests.

mod youtube;

pub use youtube::YoutubeCaptions;

use async_trait::async_trait;

/// Result of a caption lookup.
///
/// Absence is not an error: `NotAvailable` covers disabled captions and
/// missing tracks for the requested languages, and is what triggers the
/// audio fallback. `ProviderError` is a fault in the lookup itself and does
/// not trigger the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptionOutcome {
    /// Concatenated caption text for the best matching track.
    Found(String),
    /// No usable track exists for the requested languages.
    NotAvailable,
    /// The provider could not be queried.
    ProviderError(String),
}

/// Trait for caption track providers.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// Fetch the caption text for a video, if a usable track exists.
    async fn fetch(&self, video_id: &str) -> CaptionOutcome;
}
