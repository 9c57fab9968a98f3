use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};

use crate::config::LlmConfig;
use crate::error::{LlmError, LlmResult};
use crate::types::*;

/// Anything that can answer a prompt under a system instruction.
///
/// Implementations never fail: transport and API errors are rendered as
/// `"Error: <description>"` and returned as ordinary text, so callers must be
/// ready for any string.
#[async_trait]
pub trait Inference: Send + Sync {
    async fn call(&self, prompt: &str, system_message: &str) -> String;
}

/// Client for OpenAI-compatible chat-completion endpoints
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>, config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Build a client whose key comes from `config.api_key_env`.
    pub fn from_env(config: LlmConfig) -> LlmResult<Self> {
        let api_key = config.api_key_from_env()?;
        Ok(Self::new(api_key, config))
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// One system + user exchange. Errors are returned, not rendered.
    pub async fn try_call(&self, prompt: &str, system_message: &str) -> LlmResult<String> {
        self.chat_completion(vec![
            ChatMessage::system(system_message),
            ChatMessage::user(prompt),
        ])
        .await
    }

    pub async fn chat_completion(&self, messages: Vec<ChatMessage>) -> LlmResult<String> {
        debug!(
            "Creating chat completion with {} messages, model {}",
            messages.len(),
            self.config.model
        );

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
            stream: Some(false),
        };

        let response = self
            .client
            .post(self.config.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<ApiErrorBody>(&body) {
                error!(
                    "Inference API error: {} (type: {:?})",
                    error_resp.error.message, error_resp.error.error_type
                );
                return Err(LlmError::Api {
                    message: error_resp.error.message,
                    status_code: Some(status.as_u16()),
                });
            }

            return Err(LlmError::Api {
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
                status_code: Some(status.as_u16()),
            });
        }

        let chat_response: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Chat completion usage"
            );
        }

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl Inference for ChatClient {
    async fn call(&self, prompt: &str, system_message: &str) -> String {
        match self.try_call(prompt, system_message).await {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    error = %e,
                    status_code = ?e.status_code(),
                    "Chat completion failed, returning error text"
                );
                format!("Error: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ChatClient::new("test-key", LlmConfig::default());
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.config().base_url, "https://api.x.ai/v1");
    }

    #[test]
    fn test_from_env_missing_key() {
        let config = LlmConfig {
            api_key_env: "CODEGEN_AGENTS_CLIENT_TEST_UNSET".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ChatClient::from_env(config),
            Err(LlmError::MissingApiKey { .. })
        ));
    }
}
