//! Chat reply resolution: ask the remote model first, answer from the local
//! keyword table when there is no credential or the call does not produce
//! text. `Resolver::resolve` never fails.

mod language;
pub mod table;

pub use language::Language;
pub use table::{ResponseTable, TableError};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, LlmConfig};
use crate::llm::{
    models::{ChatOptions, Message},
    LlmError, LlmProvider, ProviderFactory,
};

const SYSTEM_PROMPT_ES: &str = "Eres un asistente educativo especializado en enseñar diseño de prompts para IA. Proporciona respuestas concisas y educativas sobre cómo crear buenos prompts. Las respuestas deben ser de máximo 150 palabras y apropiadas para estudiantes.";
const SYSTEM_PROMPT_EN: &str = "You are an educational assistant specialized in teaching AI prompt design. Provide concise, educational responses about how to create good prompts. Responses should be maximum 150 words and appropriate for students.";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Es => SYSTEM_PROMPT_ES,
        Language::En => SYSTEM_PROMPT_EN,
    }
}

/// Generation parameters for the remote call.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 250,
            temperature: 0.7,
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&LlmConfig> for ResolverSettings {
    fn from(cfg: &LlmConfig) -> Self {
        Self {
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            timeout: cfg.timeout(),
        }
    }
}

pub struct Resolver {
    provider: Option<Arc<dyn LlmProvider>>,
    table: Arc<ResponseTable>,
    settings: ResolverSettings,
}

impl Resolver {
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        table: Arc<ResponseTable>,
        settings: ResolverSettings,
    ) -> Self {
        Self {
            provider,
            table,
            settings,
        }
    }

    /// Resolver with the configured provider (if any) and the built-in table.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            ProviderFactory::create_default(config),
            Arc::new(ResponseTable::builtin()),
            ResolverSettings::from(&config.llm),
        )
    }

    pub fn provider(&self) -> Option<&Arc<dyn LlmProvider>> {
        self.provider.as_ref()
    }

    pub fn table(&self) -> &ResponseTable {
        &self.table
    }

    pub async fn resolve(&self, message: &str, language: Language) -> String {
        let Some(provider) = &self.provider else {
            info!("No API key configured. Using predefined response.");
            return self.fallback(message, language);
        };

        match self.ask_remote(provider.as_ref(), message, language).await {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = provider.name(), "Remote completion failed, using predefined response: {}", e);
                self.fallback(message, language)
            }
        }
    }

    /// Local keyword answer, without touching the network.
    pub fn fallback(&self, message: &str, language: Language) -> String {
        match self.table.find(message, language) {
            Some((keyword, reply)) => {
                debug!(%language, keyword, "Matched predefined response");
                reply.to_string()
            }
            None => {
                debug!(%language, "No keyword matched; using default response");
                self.table.default_reply(language).to_string()
            }
        }
    }

    async fn ask_remote(
        &self,
        provider: &dyn LlmProvider,
        message: &str,
        language: Language,
    ) -> Result<String, LlmError> {
        let messages = [Message::user(message)];
        let options = ChatOptions {
            model: Some(self.settings.model.clone()),
            temperature: Some(self.settings.temperature),
            max_tokens: Some(self.settings.max_tokens),
            system_prompt: Some(system_prompt(language).to_string()),
        };

        let response = tokio::time::timeout(self.settings.timeout, provider.chat(&messages, options))
            .await
            .map_err(|_| LlmError::Timeout)??;

        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| LlmError::InvalidResponse("completion had no text".to_string()))
    }
}
