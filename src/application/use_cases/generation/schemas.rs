use once_cell::sync::Lazy;
use serde_json::{json, Value};

// Named structured-output constraints, one per response DTO. Every call site
// references these so the schema and the consumer-side type cannot drift
// apart independently.

static MANUAL_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "testCases": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING", "description": "A unique identifier like TC-001" },
                        "title": { "type": "STRING", "description": "A concise summary of the test case" },
                        "preConditions": { "type": "STRING", "description": "Any setup required before testing" },
                        "steps": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Step-by-step instructions"
                        },
                        "expectedResult": { "type": "STRING", "description": "What should happen if the feature works correctly" },
                        "priority": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
                        "type": { "type": "STRING", "enum": ["Positive", "Negative", "Edge Case"] }
                    },
                    "required": ["id", "title", "steps", "expectedResult", "priority", "type", "preConditions"]
                }
            },
            "gherkinScenarios": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "Scenario name" },
                        "steps": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "Gherkin steps starting with Given, When, Then, And, But"
                        }
                    },
                    "required": ["name", "steps"]
                }
            }
        },
        "required": ["testCases", "gherkinScenarios"]
    })
});

static SINGLE_SCRIPT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "fileName": { "type": "STRING", "description": "Recommended filename, e.g., login.spec.ts" },
            "code": { "type": "STRING", "description": "Complete source code with newlines." }
        },
        "required": ["fileName", "code"]
    })
});

static ANALYSIS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "OBJECT",
        "properties": {
            "isAmbiguous": { "type": "BOOLEAN" },
            "issues": { "type": "ARRAY", "items": { "type": "STRING" } },
            "missingDetails": { "type": "ARRAY", "items": { "type": "STRING" } },
            "suggestions": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["isAmbiguous", "issues", "missingDetails", "suggestions"]
    })
});

pub(crate) fn manual_schema() -> Value {
    MANUAL_SCHEMA.clone()
}

pub(crate) fn single_script_schema() -> Value {
    SINGLE_SCRIPT_SCHEMA.clone()
}

pub(crate) fn analysis_schema() -> Value {
    ANALYSIS_SCHEMA.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::AnalysisResult;
    use crate::domain::test_assets::{CaseType, Priority, TestCase};

    fn required_fields(schema: &Value, path: &[&str]) -> Vec<String> {
        let mut node = schema;
        for segment in path {
            node = &node[segment];
        }
        node["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_manual_schema_matches_test_case_wire_fields() {
        let case = TestCase {
            id: "TC-001".to_string(),
            title: "t".to_string(),
            pre_conditions: "p".to_string(),
            steps: vec!["s".to_string()],
            expected_result: "e".to_string(),
            priority: Priority::High,
            case_type: CaseType::Positive,
        };
        let serialized = serde_json::to_value(&case).unwrap();
        for field in required_fields(&manual_schema(), &["properties", "testCases", "items"]) {
            assert!(
                serialized.get(&field).is_some(),
                "schema requires '{}' but TestCase does not serialize it",
                field
            );
        }
    }

    #[test]
    fn test_analysis_schema_matches_analysis_result_wire_fields() {
        let analysis = AnalysisResult {
            is_ambiguous: false,
            issues: vec![],
            missing_details: vec![],
            suggestions: vec![],
        };
        let serialized = serde_json::to_value(&analysis).unwrap();
        for field in required_fields(&analysis_schema(), &[]) {
            assert!(
                serialized.get(&field).is_some(),
                "schema requires '{}' but AnalysisResult does not serialize it",
                field
            );
        }
    }

    #[test]
    fn test_script_schema_required_fields() {
        assert_eq!(
            required_fields(&single_script_schema(), &[]),
            vec!["fileName", "code"]
        );
    }
}
