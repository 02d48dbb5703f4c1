use serde::{Deserialize, Serialize};

/// Ambiguity report for a user story, produced by the analyze request kind.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_ambiguous: bool,
    pub issues: Vec<String>,
    pub missing_details: Vec<String>,
    pub suggestions: Vec<String>,
}
