pub mod models;
pub mod openai;

use openai::OpenAiProvider;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AppConfig;
use models::{ChatOptions, ChatResponse, Message};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("API Error: {0}")]
    Api(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate Limited")]
    RateLimited,
    #[error("Invalid Response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else if e.is_decode() {
            LlmError::InvalidResponse(e.to_string())
        } else {
            LlmError::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn chat(&self, messages: &[Message], options: ChatOptions) -> Result<ChatResponse, LlmError>;

    /// Cheap authenticated call used to check that the credential works.
    async fn validate(&self) -> Result<(), LlmError>;
}

pub struct ProviderFactory;

impl ProviderFactory {
    /// Builds the configured provider. Returns `None` when no credential is
    /// configured, which puts the resolver in local-only mode.
    pub fn create_default(config: &AppConfig) -> Option<Arc<dyn LlmProvider>> {
        let Some(api_key) = config.llm.credential() else {
            info!("No API key configured; remote completions disabled");
            return None;
        };

        match config.llm.provider.to_ascii_lowercase().as_str() {
            "openai" => match OpenAiProvider::new(
                api_key.to_string(),
                config.llm.api_base.clone(),
                config.llm.model.clone(),
                config.llm.timeout(),
            ) {
                Ok(p) => Some(Arc::new(p)),
                Err(e) => {
                    warn!("Failed to build OpenAI client: {}", e);
                    None
                }
            },
            _ => {
                warn!("Unknown LLM provider '{}'; remote completions disabled", config.llm.provider);
                None
            }
        }
    }

    /// Explains why `create_default` produced no provider for this config.
    pub fn unavailable_reason(config: &AppConfig) -> String {
        if config.llm.credential().is_none() {
            "No API key found in environment variables".to_string()
        } else {
            format!("Unknown LLM provider '{}'", config.llm.provider)
        }
    }
}
