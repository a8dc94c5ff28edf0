use std::env;

use crate::errors::ChatError;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Environment lookup collaborator. Injected into the config constructor so
/// tests can supply values without mutating the process environment.
pub trait EnvProvider {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Immutable settings for the DeepSeek API, built once per process.
#[derive(Debug, Clone)]
pub struct DeepseekConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl DeepseekConfig {
    /// # Errors
    ///
    /// Returns `ChatError::Config` if `DEEPSEEK_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::from_provider(&ProcessEnv)
    }

    pub fn from_provider(env: &dyn EnvProvider) -> Result<Self, ChatError> {
        let api_key = env
            .var("DEEPSEEK_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ChatError::Config("DEEPSEEK_API_KEY environment variable must be set".to_string())
            })?;

        Ok(Self {
            api_key,
            base_url: env
                .var("DEEPSEEK_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: env
                .var("DEEPSEEK_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}
