use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::history::{GenerationKind, HistoryItem};
use crate::domain::test_assets::GeneratedResponse;

const HISTORY_CAP: usize = 100;

/// Newest-first list of past generations. In-memory stand-in for whatever
/// store the deployment persists history in.
pub struct HistoryStore {
    items: Mutex<Vec<HistoryItem>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn record_story(&self, user_story: &str, response: &GeneratedResponse) -> HistoryItem {
        let item = HistoryItem {
            id: Uuid::new_v4().to_string(),
            date: chrono::Utc::now(),
            kind: GenerationKind::UserStory,
            user_story: Some(user_story.to_string()),
            test_case_count: Some(response.test_cases.len()),
            script_count: Some(response.automation_scripts.len()),
            test_cases: response.test_cases.clone(),
            automation_scripts: response.automation_scripts.clone(),
            prompt: None,
            result: None,
        };
        self.push(item.clone());
        item
    }

    pub fn record_artifact(&self, kind: GenerationKind, prompt: &str, result: &str) -> HistoryItem {
        let item = HistoryItem {
            id: Uuid::new_v4().to_string(),
            date: chrono::Utc::now(),
            kind,
            user_story: None,
            test_case_count: None,
            script_count: None,
            test_cases: Vec::new(),
            automation_scripts: Vec::new(),
            prompt: Some(prompt.to_string()),
            result: Some(result.to_string()),
        };
        self.push(item.clone());
        item
    }

    pub fn list(&self) -> Vec<HistoryItem> {
        self.items.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.items.lock().unwrap().clear();
    }

    fn push(&self, item: HistoryItem) {
        let mut items = self.items.lock().unwrap();
        items.insert(0, item);
        items.truncate(HISTORY_CAP);
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
