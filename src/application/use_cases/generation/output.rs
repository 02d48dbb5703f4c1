use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::test_assets::{GherkinScenario, TestCase};
use crate::infrastructure::response::extract_json_payload;

/// Payload of the manual/BDD call. Missing arrays default to empty rather
/// than failing the whole request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ManualOutput {
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub gherkin_scenarios: Vec<GherkinScenario>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScriptOutput {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

pub(crate) fn parse_manual_output(raw: &str) -> Result<ManualOutput> {
    serde_json::from_str(&extract_json_payload(raw)).map_err(|e| {
        AppError::ParseError(format!("Manual generation returned malformed JSON: {}", e))
    })
}

pub(crate) fn parse_script_output(raw: &str) -> Result<ScriptOutput> {
    serde_json::from_str(&extract_json_payload(raw)).map_err(|e| {
        AppError::ParseError(format!("Script generation returned malformed JSON: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let parsed = parse_manual_output("{}").unwrap();
        assert!(parsed.test_cases.is_empty());
        assert!(parsed.gherkin_scenarios.is_empty());
    }

    #[test]
    fn test_fenced_script_payload_parses() {
        let raw = "```json\n{\"fileName\": \"login.cy.js\", \"code\": \"it('works')\"}\n```";
        let parsed = parse_script_output(raw).unwrap();
        assert_eq!(parsed.file_name.as_deref(), Some("login.cy.js"));
        assert_eq!(parsed.code.as_deref(), Some("it('works')"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let error = parse_manual_output("not json at all").unwrap_err();
        assert!(matches!(error, AppError::ParseError(_)));
    }
}
