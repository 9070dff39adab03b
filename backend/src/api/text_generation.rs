use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::{api::OpenAIClient, chat_completion};
use thiserror::Error;

use crate::config::Config;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("could not build generation client: {0}")]
    Client(String),
    #[error("generation request failed: {0}")]
    Request(String),
    #[error("generation request timed out")]
    Timeout,
    #[error("generation returned no text")]
    Empty,
    #[error("generated text mentions clinical care")]
    Forbidden,
}

/// Turns a prompt into a single piece of text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Chat-completion backed generator, pointed at OpenRouter by default.
pub struct OpenRouterGenerator {
    client: OpenAIClient,
    model: String,
    timeout: Duration,
}

impl OpenRouterGenerator {
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        let client = OpenAIClient::builder()
            .with_endpoint(config.endpoint.clone())
            .with_api_key(config.api_key.clone())
            .build()
            .map_err(|e| GenerationError::Client(e.to_string()))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenRouterGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let messages = vec![chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::user,
            content: chat_completion::Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }];

        let request = chat_completion::ChatCompletionRequest::new(self.model.clone(), messages)
            .max_tokens(150);

        let result = tokio::time::timeout(self.timeout, self.client.chat_completion(request))
            .await
            .map_err(|_| GenerationError::Timeout)?
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        tracing::debug!("Generation finished with {} choices", result.choices.len());

        result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GenerationError::Empty)
    }
}
