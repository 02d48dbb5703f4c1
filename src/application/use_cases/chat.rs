use std::sync::Arc;

use crate::application::use_cases::fallback::FallbackInvoker;
use crate::domain::error::{AppError, Result};
use crate::domain::invocation::ModelInvocationSpec;
use crate::domain::test_assets::TestCase;
use crate::infrastructure::response::clean_llm_response;

/// Assistant replies grounded in the current story, plan and generated test
/// set. The only request kind whose prompt is built from conversational
/// state instead of a fixed template.
pub struct ChatUseCase {
    invoker: Arc<FallbackInvoker>,
    model_candidates: Vec<String>,
}

pub(crate) fn build_system_instruction(
    user_plan: Option<&str>,
    context_story: Option<&str>,
    test_cases: &[TestCase],
) -> String {
    let summary = test_cases
        .iter()
        .map(|tc| format!("- [{:?}] {}", tc.priority, tc.title))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are the "ZiaraQA" Assistant. Your goal is to help users navigate the app and understand their test results.

APP CAPABILITIES:
1. Generate Manual Test Cases (Available on all plans).
2. Generate BDD/Gherkin Scenarios (Locked on STARTER, Available on PRO).
3. Generate Automation Scripts (Playwright, Cypress, Selenium) (Locked on STARTER, Available on PRO).
4. Export to CSV (Available on all plans).
5. Push to Jira (Simulated integration).
6. Team Workspace (Enterprise only).

CURRENT CONTEXT:
- User Plan: {}
- Current User Story: "{}"
- Generated Test Cases Summary:
{}

INSTRUCTIONS:
- If the user asks about the app (e.g., "How do I export?", "Why can't I see scripts?"), answer based on the APP CAPABILITIES and their User Plan.
- If the user asks about the tests (e.g., "Add a negative case", "Explain test 3"), use the CURRENT CONTEXT.
- **FORMATTING:** Use **bold** for key terms. Use bullet points for lists. Keep paragraphs short and readable.
- Be concise, professional, and helpful."#,
        user_plan.unwrap_or("STARTER"),
        context_story.unwrap_or(""),
        summary
    )
}

impl ChatUseCase {
    pub fn new(invoker: Arc<FallbackInvoker>, model_candidates: Vec<String>) -> Self {
        Self {
            invoker,
            model_candidates,
        }
    }

    pub async fn execute(
        &self,
        message: &str,
        user_plan: Option<&str>,
        context_story: Option<&str>,
        test_cases: &[TestCase],
    ) -> Result<String> {
        if message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Chat message must not be empty.".to_string(),
            ));
        }

        let spec = ModelInvocationSpec::new(message, self.model_candidates.clone())
            .with_system_instruction(build_system_instruction(
                user_plan,
                context_story,
                test_cases,
            ));

        let raw = self.invoker.execute(&spec).await?;
        Ok(clean_llm_response(&raw))
    }
}
