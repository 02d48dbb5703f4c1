use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings for the hosted model API. Built once at startup and
/// passed by parameter; core logic never reads ambient environment.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// One automation framework/language pair the fan-out generates a script for.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FrameworkTarget {
    pub tool: String,
    pub language: String,
}

impl FrameworkTarget {
    pub fn new(tool: &str, language: &str) -> Self {
        Self {
            tool: tool.to_string(),
            language: language.to_string(),
        }
    }

    /// Display string used in the `framework` field, e.g. "Playwright (TypeScript)".
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.tool, self.language)
    }
}

/// Model roster and fan-out targets. Configuration data, not literals: the
/// defaults mirror the hosted deployment but everything is injectable.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationSettings {
    /// Ranked fallback chain, fastest model first.
    pub model_candidates: Vec<String>,
    pub frameworks: Vec<FrameworkTarget>,
    pub request_timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model_candidates: vec![
                "gemini-2.0-flash".to_string(),
                "gemini-2.5-flash".to_string(),
                "gemini-1.5-flash".to_string(),
            ],
            frameworks: vec![
                FrameworkTarget::new("Playwright", "TypeScript"),
                FrameworkTarget::new("Cypress", "JavaScript"),
                FrameworkTarget::new("Selenium", "Java"),
                FrameworkTarget::new("Selenium", "Python"),
            ],
            request_timeout_secs: 120,
        }
    }
}
