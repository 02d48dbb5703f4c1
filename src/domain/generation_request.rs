use serde::Deserialize;

use crate::domain::test_assets::TestCase;

fn default_include_automation() -> bool {
    true
}

/// Tagged request body accepted by the generate endpoint. Wire format matches
/// the relay contract: `{"type": "...", "payload": {...}}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum GenerationRequest {
    #[serde(rename = "testcases", rename_all = "camelCase")]
    TestCases {
        user_story: String,
        #[serde(default = "default_include_automation")]
        include_automation: bool,
    },
    #[serde(rename_all = "camelCase")]
    Analyze { user_story: String },
    SyntheticData { prompt: String },
    UnitTests { code: String, framework: String },
    ApiTests { input: String },
    #[serde(rename_all = "camelCase")]
    Chat {
        message: String,
        #[serde(default)]
        user_plan: Option<String>,
        #[serde(default)]
        context_story: Option<String>,
        #[serde(default)]
        test_cases: Vec<TestCase>,
    },
}
