use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use llm::LlmConfig;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

const PROJECT_CONFIG: &str = ".codegen-agents/config.toml";
const APP_DIR: &str = "codegen-agents";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Candidate config files, most specific first.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_DIR).join(CONFIG_FILE));
        }
        paths
    }

    /// Load the explicit config file, or the first one found on the search
    /// path, or defaults.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Self::read(path).await);
        }

        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Ok(Self::read(&path).await),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read a config file, falling back to defaults when it cannot be used.
    pub async fn read(path: &Path) -> Self {
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!(path = %path.display(), "Config loaded successfully");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[llm]\nmodel = \"gpt-4.1-nano\"\nbase_url = \"https://api.openai.com/v1\"\napi_key_env = \"OPENAI_API_KEY\"\n",
        )
        .unwrap();

        let config = AppConfig::read(&path).await;
        assert_eq!(config.llm.model, "gpt-4.1-nano");
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.llm.max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_read_invalid_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let config = AppConfig::read(&path).await;
        assert_eq!(config.llm, LlmConfig::default());
    }

    #[tokio::test]
    async fn test_load_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        assert!(AppConfig::load(Some(&path)).await.is_err());
    }
}
