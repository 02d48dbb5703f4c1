use serde::{Deserialize, Serialize};

use crate::domain::test_assets::{AutomationScript, TestCase};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationKind {
    UserStory,
    SyntheticData,
    UnitTest,
    ApiTest,
}

/// One past generation, kept so the UI can reload earlier results. Owned by
/// the surrounding application, not the orchestration core.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "type")]
    pub kind: GenerationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_story: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_case_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_cases: Vec<TestCase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub automation_scripts: Vec<AutomationScript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}
