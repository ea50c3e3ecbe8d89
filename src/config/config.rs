use serde::Deserialize;
use std::time::Duration;

/// Environment variable consulted when no key is configured explicitly.
pub const DEFAULT_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: String,
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o".to_string(),
            max_tokens: 250,
            temperature: 0.7,
            timeout_secs: 10,
        }
    }
}

impl LlmConfig {
    /// The configured credential, or `None` when it is empty.
    pub fn credential(&self) -> Option<&str> {
        let key = self.api_key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    pub default_language: String,
    /// Remote calls a CLI chat session may make before it answers locally.
    pub free_interactions: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_language: "es".to_string(),
            free_interactions: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ResourcesConfig {
    pub dir: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            dir: "resources".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub chat: ChatConfig,
    pub resources: ResourcesConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PROMPTLAB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;
        app_config.expand();
        app_config.check()?;

        Ok(app_config)
    }

    /// Rejects settings that would make every remote call fail.
    pub fn check(&self) -> Result<(), config::ConfigError> {
        if self.llm.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "llm.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    // Values like ${OPENAI_API_KEY} are resolved against the process environment.
    fn expand(&mut self) {
        self.server.host = expand_env(&self.server.host);
        self.llm.api_base = expand_env(&self.llm.api_base);
        self.llm.api_key = expand_env(&self.llm.api_key);
        if self.llm.api_key.trim().is_empty() {
            self.llm.api_key = std::env::var(DEFAULT_KEY_VAR).unwrap_or_default();
        }
        self.resources.dir = expand_env(&self.resources.dir);
    }
}

pub fn expand_env(val: &str) -> String {
    match val.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        Some(var_name) => std::env::var(var_name).unwrap_or_default(),
        None => val.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_passthrough() {
        assert_eq!(expand_env("plain"), "plain");
        assert_eq!(expand_env("${"), "${");
    }

    #[test]
    fn test_expand_env_missing_var_is_empty() {
        assert_eq!(expand_env("${PROMPTLAB_TEST_SURELY_UNSET_VAR}"), "");
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        assert!(config.check().is_ok());

        config.llm.timeout_secs = 0;
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_load_rejects_zero_timeout_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero_timeout.yaml");
        std::fs::write(&path, "llm:\n  timeout_secs: 0\n").unwrap();

        assert!(AppConfig::load(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_blank_credential_is_absent() {
        let mut llm = LlmConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(llm.credential().is_none());

        llm.api_key = " sk-test ".to_string();
        assert_eq!(llm.credential(), Some("sk-test"));
    }
}
