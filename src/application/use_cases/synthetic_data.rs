use std::sync::Arc;

use crate::application::use_cases::fallback::FallbackInvoker;
use crate::domain::error::{AppError, Result};
use crate::domain::invocation::ModelInvocationSpec;
use crate::infrastructure::response::extract_json_payload;

fn build_strict_prompt(request: &str) -> String {
    format!(
        r#"You are a Synthetic Data Generator Engine.

User Request: "{}"

STRICT SAFETY RULES (MUST FOLLOW):
1. **PHONES:** Use clearly FAKE or DUMMY numbers.
   - For India (+91), use patterns like **99999XXXXX**, **88888XXXXX**, or sequential **9876543210**.
   - NEVER generate random "realistic" numbers that could belong to real people.
2. **EMAILS:** STRICTLY use reserved domains only: **@example.com**, **@test.com**, **@invalid.com**.
3. **NAMES:** Use generic names (e.g., "Test User 1", "Demo Account") or clearly fictional names.
4. **ADDRESSES:** Use "123 Test St", "Null Island", "Sample City".
5. **FORMAT:** Return ONLY a valid JSON Array.

Goal: Data must pass validation regex but MUST NOT be real."#,
        request
    )
}

/// Generates fake-but-well-formed records for test fixtures. Output is a raw
/// JSON string; the caller decides how to frame it.
pub struct SyntheticDataUseCase {
    invoker: Arc<FallbackInvoker>,
    model_candidates: Vec<String>,
}

impl SyntheticDataUseCase {
    pub fn new(invoker: Arc<FallbackInvoker>, model_candidates: Vec<String>) -> Self {
        Self {
            invoker,
            model_candidates,
        }
    }

    pub async fn execute(&self, prompt: &str) -> Result<String> {
        let request = prompt.trim();
        if request.is_empty() {
            return Err(AppError::ValidationError(
                "Data request must not be empty.".to_string(),
            ));
        }

        let spec = ModelInvocationSpec::new(
            build_strict_prompt(request),
            self.model_candidates.clone(),
        )
        .with_json_output();

        let raw = self.invoker.execute(&spec).await?;
        Ok(extract_json_payload(&raw))
    }
}
