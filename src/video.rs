//! Video reference normalization.

/// Extract a canonical video identifier from a URL or bare identifier.
///
/// Recognizes the `v=` query parameter and the `youtu.be/` path segment.
/// Input with neither marker is passed through unchanged; it may already be
/// a bare identifier, or malformed, in which case the failure surfaces
/// downstream. Never fails.
pub fn extract_video_id(reference: &str) -> String {
    if let Some((_, rest)) = reference.split_once("v=") {
        return rest.split('&').next().unwrap_or(rest).to_string();
    }
    if let Some((_, rest)) = reference.split_once("youtu.be/") {
        return rest.split('?').next().unwrap_or(rest).to_string();
    }
    reference.to_string()
}
