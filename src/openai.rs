//! OpenAI-compatible API client configuration.
//!
//! The transcription and summarization providers both speak the OpenAI API
//! surface; the base URL defaults to Groq's compatible endpoint.

use crate::config::ApiSettings;
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;
use tracing::warn;

/// Create a client for the configured provider with a bounded request timeout.
///
/// The API key is read from the environment variable named in the settings.
/// A missing key is logged, not treated as an error; downstream calls fail
/// to authenticate instead.
pub fn create_client(api: &ApiSettings) -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(api.request_timeout_seconds))
        .build()
        .expect("Failed to create HTTP client");

    let mut config = OpenAIConfig::default().with_api_base(&api.base_url);

    match std::env::var(&api.key_env) {
        Ok(key) => config = config.with_api_key(key),
        Err(_) => warn!(
            "{} is not set; API calls will fail to authenticate",
            api.key_env
        ),
    }

    Client::with_config(config).with_http_client(http_client)
}
