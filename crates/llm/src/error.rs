use thiserror::Error;

/// Errors raised while talking to the inference endpoint
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Inference API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("No completion returned")]
    EmptyResponse,

    #[error("Missing API key: environment variable {var} is not set")]
    MissingApiKey { var: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl LlmError {
    /// HTTP status of the failed request, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            LlmError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for inference operations
pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = LlmError::Api {
            message: "model not found".to_string(),
            status_code: Some(404),
        };
        assert_eq!(error.to_string(), "Inference API error: model not found");
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_missing_key_display() {
        let error = LlmError::MissingApiKey {
            var: "XAI_API_KEY".to_string(),
        };
        assert!(error.to_string().contains("XAI_API_KEY"));
        assert_eq!(error.status_code(), None);
    }
}
