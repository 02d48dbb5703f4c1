use std::sync::Arc;

use crate::application::use_cases::fallback::FallbackInvoker;
use crate::application::use_cases::generation::schemas::analysis_schema;
use crate::domain::analysis::AnalysisResult;
use crate::domain::error::{AppError, Result};
use crate::domain::invocation::ModelInvocationSpec;
use crate::infrastructure::response::extract_json_payload;

/// Flags ambiguity and missing detail in a user story before generation.
pub struct AnalyzeRequirementsUseCase {
    invoker: Arc<FallbackInvoker>,
    model_candidates: Vec<String>,
}

impl AnalyzeRequirementsUseCase {
    pub fn new(invoker: Arc<FallbackInvoker>, model_candidates: Vec<String>) -> Self {
        Self {
            invoker,
            model_candidates,
        }
    }

    pub async fn execute(&self, user_story: &str) -> Result<AnalysisResult> {
        let story = user_story.trim();
        if story.is_empty() {
            return Err(AppError::ValidationError(
                "User story must not be empty.".to_string(),
            ));
        }

        let spec = ModelInvocationSpec::new(
            format!(r#"Analyze user story: "{}""#, story),
            self.model_candidates.clone(),
        )
        .with_response_schema(analysis_schema());

        let raw = self.invoker.execute(&spec).await?;
        serde_json::from_str(&extract_json_payload(&raw))
            .map_err(|e| AppError::ParseError(format!("Analysis returned malformed JSON: {}", e)))
    }
}
