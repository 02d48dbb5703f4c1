use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::classify::classify_provider_error;
use super::ModelClient;
use crate::domain::error::{AppError, Result};
use crate::domain::invocation::ModelInvocationSpec;
use crate::domain::llm_config::ProviderConfig;

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Deserialize)]
struct GeminiCandidatePart {
    text: String,
}

pub struct GeminiClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig, timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            config,
        }
    }

    fn request_body(&self, spec: &ModelInvocationSpec) -> GeminiRequest {
        let generation_config = GenerationConfig {
            temperature: self.config.temperature.map(|t| t as f64),
            max_output_tokens: self.config.max_output_tokens,
            response_mime_type: spec
                .json_output
                .then(|| "application/json".to_string()),
            response_schema: spec.response_schema.clone(),
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: spec.prompt.clone(),
                }],
                role: Some("user".to_string()),
            }],
            system_instruction: spec.system_instruction.as_ref().map(|text| GeminiContent {
                parts: vec![GeminiPart { text: text.clone() }],
                role: None,
            }),
            generation_config: Some(generation_config),
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, model_id: &str, spec: &ModelInvocationSpec) -> Result<String> {
        let base_url = self.config.base_url.trim_end_matches('/');
        let url = format!(
            "{}/{}:generateContent?key={}",
            base_url,
            model_id.trim(),
            self.config.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&self.request_body(spec))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::ModelBusy(format!("Request timed out: {}", e))
                } else {
                    AppError::ModelError(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(classify_provider_error(status, &text));
        }

        let json: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelError(format!("Failed to parse JSON: {}", e)))?;

        let text = json
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| AppError::ModelError("Invalid response format".to_string()))?;

        if text.trim().is_empty() {
            return Err(AppError::ModelError("Empty response".to_string()));
        }

        Ok(text)
    }
}
