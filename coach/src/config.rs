use gptlife_llm::openrouter::{OpenRouterChatModel, OpenRouterChatModelOptions};
use thiserror::Error;

const API_KEY_VAR: &str = "OPENROUTER_API_KEY";
const MODEL_VAR: &str = "GPTLIFE_MODEL";
const BASE_URL_VAR: &str = "GPTLIFE_BASE_URL";

const DEFAULT_MODEL: &str = "openai/gpt-oss-20b:free";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The credential is required up front so a missing key fails at
    /// startup instead of on the first chat request.
    #[error("Missing required environment variable {0}")]
    MissingKey(&'static str),
}

/// Model-provider configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model_id: String,
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingKey(API_KEY_VAR))?;
        Ok(Self {
            api_key,
            model_id: std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var(BASE_URL_VAR).ok(),
        })
    }

    /// Build the chat model this configuration points at.
    #[must_use]
    pub fn build_model(&self) -> OpenRouterChatModel {
        OpenRouterChatModel::new(
            self.model_id.clone(),
            OpenRouterChatModelOptions {
                api_key: self.api_key.clone(),
                base_url: self.base_url.clone(),
            },
        )
    }
}
