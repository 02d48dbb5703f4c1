use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{FrameworkTarget, GenerationSettings, ProviderConfig, DEFAULT_BASE_URL};

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Process configuration, merged from `ziaraqa.toml` and `ZIARAQA_*`
/// environment variables. The API key additionally falls back to the
/// `GEMINI_API_KEY` / `API_KEY` variables the hosted deployment uses.
#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub model_candidates: Option<Vec<String>>,
    #[serde(default)]
    pub frameworks: Option<Vec<FrameworkTarget>>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut config: AppConfig = Figment::new()
            .merge(Toml::file("ziaraqa.toml"))
            .merge(Env::prefixed("ZIARAQA_").split("__"))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        if config.base_url.is_empty() {
            config.base_url = default_base_url();
        }
        if config.api_key.is_none() {
            config.api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok();
        }

        config
            .validate()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    pub fn provider(&self) -> Result<ProviderConfig> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| AppError::ConfigError("Missing API key for Google provider".to_string()))?;
        Ok(ProviderConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key,
            temperature: None,
            max_output_tokens: None,
        })
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        let mut settings = GenerationSettings::default();
        if let Some(candidates) = &self.model_candidates {
            settings.model_candidates = candidates.clone();
        }
        if let Some(frameworks) = &self.frameworks {
            settings.frameworks = frameworks.clone();
        }
        if let Some(timeout) = self.request_timeout_secs {
            settings.request_timeout_secs = timeout;
        }
        settings
    }
}
