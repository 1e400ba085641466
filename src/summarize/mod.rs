//! LLM summarization.

use crate::config::{ApiSettings, Prompts, SummarySettings};
use crate::error::{Result, SammendragError};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Trait for summarizers.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a bullet-point summary of the given text.
    ///
    /// The input is the full transcript, unbounded; no chunking or length
    /// guard is applied before submission.
    async fn summarize(&self, text: &str) -> Result<String>;
}

/// Summarizer backed by a chat-completion model.
pub struct BulletSummarizer {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    prompts: Prompts,
}

impl BulletSummarizer {
    pub fn new(api: &ApiSettings, settings: &SummarySettings, prompts: Prompts) -> Self {
        Self {
            client: create_client(api),
            model: settings.model.clone(),
            temperature: settings.temperature,
            prompts,
        }
    }
}

#[async_trait]
impl Summarizer for BulletSummarizer {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn summarize(&self, text: &str) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), text.to_string());

        let user_prompt = Prompts::render(&self.prompts.summary.user, &vars);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.prompts.summary.system.clone())
                .build()
                .map_err(|e| SammendragError::Summarization(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_prompt)
                .build()
                .map_err(|e| SammendragError::Summarization(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| SammendragError::Summarization(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| SammendragError::OpenAI(format!("Failed to generate summary: {e}")))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| SammendragError::Summarization("Empty response from LLM".to_string()))?
            .clone();

        debug!("Generated summary ({} chars)", summary.len());
        Ok(summary)
    }
}
