//! Prompt templates for Sammendrag.
//!
//! Templates use `{{variable}}` placeholders and can be overridden from the
//! configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
}


/// Prompts for bullet-point summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    pub system: String,
    pub user: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            system: "You summarize spoken video content. \
                     Answer with clear, concise bullet points and avoid fluff."
                .to_string(),
            user: "Summarize the following video transcript clearly in bullet points.\n\n{{transcript}}"
                .to_string(),
        }
    }
}

impl Prompts {
    /// Render a prompt template by replacing `{{key}}` placeholders.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(!prompts.summary.system.is_empty());
        assert!(prompts.summary.user.contains("{{transcript}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Summarize this:\n\n{{transcript}}";
        let mut vars = HashMap::new();
        vars.insert("transcript".to_string(), "hello world".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Summarize this:\n\nhello world");
    }
}
