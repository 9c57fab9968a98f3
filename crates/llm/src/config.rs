use serde::{Deserialize, Serialize};

use crate::error::{LlmError, LlmResult};

pub const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";
pub const DEFAULT_MODEL: &str = "grok-4-0709";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_API_KEY_ENV: &str = "XAI_API_KEY";

/// Endpoint and sampling settings shared by every stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API, without `/chat/completions`
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Name of the environment variable holding the bearer token
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl LlmConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Read the API key from the configured environment variable.
    ///
    /// An empty value counts as missing.
    pub fn api_key_from_env(&self) -> LlmResult<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(LlmError::MissingApiKey {
                var: self.api_key_env.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LlmConfig::default();
        assert_eq!(config.base_url, "https://api.x.ai/v1");
        assert_eq!(config.model, "grok-4-0709");
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.api_key_env, "XAI_API_KEY");
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let config = LlmConfig::default().with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: LlmConfig = serde_json::from_str(r#"{"model": "gpt-4.1-nano"}"#).unwrap();
        assert_eq!(config.model, "gpt-4.1-nano");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_api_key_missing() {
        let config = LlmConfig {
            api_key_env: "CODEGEN_AGENTS_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        let err = config.api_key_from_env().unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "CODEGEN_AGENTS_TEST_UNSET_KEY"));
    }

    #[test]
    fn test_api_key_present() {
        std::env::set_var("CODEGEN_AGENTS_TEST_SET_KEY", "sk-test");
        let config = LlmConfig {
            api_key_env: "CODEGEN_AGENTS_TEST_SET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_key_from_env().unwrap(), "sk-test");
    }
}
