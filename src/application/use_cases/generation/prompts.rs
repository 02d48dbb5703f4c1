use crate::domain::llm_config::FrameworkTarget;

/// The manual/BDD call owns input validation: gibberish stories come back as
/// the INVALID_INPUT sentinel case, not as an API failure.
pub(crate) const MANUAL_SYSTEM_INSTRUCTION: &str = r#"You are an expert QA Test Lead.
Your task is to analyze User Stories and generate comprehensive manual test cases (Happy path, Negative, Edge cases) and BDD Gherkin scenarios.

CRITICAL VALIDATION STEP:
Check if the input provided by the user is a valid User Story, Feature Requirement, or Technical Spec.
If the input is random text, gibberish, a simple greeting (like "hello"), or unrelated content:
- You MUST return a JSON where 'testCases' contains exactly ONE item.
- That item must have id="INVALID_INPUT" and title="Invalid User Story Detected".

Output must be strictly JSON matching the requested schema."#;

pub(crate) fn build_manual_prompt(user_story: &str) -> String {
    format!(
        r#"User Story: "{}"

TASK:
1. Generate 8-10 comprehensive Manual Test Cases (Positive, Negative, Edge).
2. Generate matching BDD Gherkin Scenarios for each.

OUTPUT: JSON with 'testCases' and 'gherkinScenarios'."#,
        user_story
    )
}

pub(crate) fn build_script_prompt(user_story: &str, target: &FrameworkTarget) -> String {
    format!(
        r#"User Story: "{}"

TASK:
Write a COMPLETE, production-ready Automation Script using **{}** in **{}**.

CRITICAL RULES:
1. **Full Coverage:** You MUST write code for ALL Positive, Negative, and Edge cases found in the story.
2. **NO MINIFICATION:** Use proper indentation and newlines.
3. **No Placeholders:** Do NOT write "// ...rest of tests". Write every line of code.
4. **Imports:** Include valid imports.

OUTPUT: JSON with 'fileName' and 'code'."#,
        user_story, target.tool, target.language
    )
}
