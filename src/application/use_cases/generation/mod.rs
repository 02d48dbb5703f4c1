mod output;
mod prompts;
pub(crate) mod schemas;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, warn};

use crate::application::use_cases::fallback::FallbackInvoker;
use crate::domain::error::{AppError, Result};
use crate::domain::gherkin::lint_scenario;
use crate::domain::invocation::ModelInvocationSpec;
use crate::domain::llm_config::{FrameworkTarget, GenerationSettings};
use crate::domain::test_assets::{AutomationScript, GeneratedResponse, StoryGeneration};

use output::{parse_manual_output, parse_script_output};
use prompts::{build_manual_prompt, build_script_prompt, MANUAL_SYSTEM_INSTRUCTION};
use schemas::{manual_schema, single_script_schema};

/// Turns one user story into the full asset bundle with a single round trip
/// of wall-clock latency: the manual/BDD call and one call per configured
/// framework run concurrently and are merged at the end.
pub struct GenerateAssetsUseCase {
    invoker: Arc<FallbackInvoker>,
    settings: GenerationSettings,
}

impl GenerateAssetsUseCase {
    pub fn new(invoker: Arc<FallbackInvoker>, settings: GenerationSettings) -> Self {
        Self { invoker, settings }
    }

    pub async fn execute(
        &self,
        user_story: &str,
        include_automation: bool,
    ) -> Result<StoryGeneration> {
        let story = user_story.trim();
        if story.is_empty() {
            return Err(AppError::ValidationError(
                "User story must not be empty.".to_string(),
            ));
        }

        let manual_spec = ModelInvocationSpec::new(
            build_manual_prompt(story),
            self.settings.model_candidates.clone(),
        )
        .with_system_instruction(MANUAL_SYSTEM_INSTRUCTION)
        .with_response_schema(manual_schema());
        let manual_task = self.invoker.execute(&manual_spec);

        // includeAutomation = false launches zero script units, not four
        // discarded ones.
        let script_tasks: Vec<_> = if include_automation {
            self.settings
                .frameworks
                .iter()
                .map(|target| self.generate_single_script(story, target))
                .collect()
        } else {
            Vec::new()
        };

        let (manual_result, automation_scripts) =
            tokio::join!(manual_task, join_all(script_tasks));
        let manual = parse_manual_output(&manual_result?)?;

        if let Some(first) = manual.test_cases.first() {
            if first.is_invalid_input_sentinel() {
                return Ok(StoryGeneration::InvalidInput {
                    title: first.title.clone(),
                });
            }
        }

        for scenario in &manual.gherkin_scenarios {
            for finding in lint_scenario(scenario) {
                warn!("Gherkin lint: {}", finding);
            }
        }

        Ok(StoryGeneration::Complete(GeneratedResponse {
            test_cases: manual.test_cases,
            gherkin_scenarios: manual.gherkin_scenarios,
            automation_scripts,
        }))
    }

    /// One framework's script. Failures degrade to a placeholder entry so a
    /// single slow or rejected framework never sinks the batch.
    async fn generate_single_script(
        &self,
        story: &str,
        target: &FrameworkTarget,
    ) -> AutomationScript {
        let spec = ModelInvocationSpec::new(
            build_script_prompt(story, target),
            self.settings.model_candidates.clone(),
        )
        .with_response_schema(single_script_schema());

        let parsed = match self.invoker.execute(&spec).await {
            Ok(raw) => parse_script_output(&raw),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(script) => AutomationScript {
                framework: target.display_name(),
                language: target.language.clone(),
                file_name: script.file_name.unwrap_or_else(|| "script".to_string()),
                code: script
                    .code
                    .unwrap_or_else(|| "// Error generating code".to_string()),
            },
            Err(e) => {
                error!("Failed to generate {} script: {}", target.tool, e);
                AutomationScript::placeholder(&target.display_name(), &target.language, &target.tool)
            }
        }
    }
}
