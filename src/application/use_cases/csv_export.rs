use crate::domain::error::{AppError, Result};
use crate::domain::test_assets::{CaseType, Priority, TestCase};

fn priority_label(priority: &Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

fn case_type_label(case_type: &CaseType) -> &'static str {
    match case_type {
        CaseType::Positive => "Positive",
        CaseType::Negative => "Negative",
        CaseType::EdgeCase => "Edge Case",
    }
}

/// Renders test cases as the spreadsheet the Export CSV button downloads:
/// one row per case, steps numbered and newline-joined inside one cell.
pub fn test_cases_to_csv(test_cases: &[TestCase]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "ID",
            "Title",
            "Type",
            "Priority",
            "Pre-Conditions",
            "Steps",
            "Expected Result",
        ])
        .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;

    for case in test_cases {
        let steps = case
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect::<Vec<_>>()
            .join("\n");
        writer
            .write_record([
                case.id.as_str(),
                case.title.as_str(),
                case_type_label(&case.case_type),
                priority_label(&case.priority),
                case.pre_conditions.as_str(),
                steps.as_str(),
                case.expected_result.as_str(),
            ])
            .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV write failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_case() -> TestCase {
        TestCase {
            id: "TC-001".to_string(),
            title: "Valid login with \"remember me\"".to_string(),
            pre_conditions: "A registered user exists".to_string(),
            steps: vec![
                "Open the login page".to_string(),
                "Submit valid credentials".to_string(),
            ],
            expected_result: "Dashboard is shown".to_string(),
            priority: Priority::High,
            case_type: CaseType::EdgeCase,
        }
    }

    #[test]
    fn test_header_and_row() {
        let csv = test_cases_to_csv(&[sample_case()]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Title,Type,Priority,Pre-Conditions,Steps,Expected Result"
        );
        assert!(csv.contains("TC-001"));
        assert!(csv.contains("Edge Case"));
        assert!(csv.contains("1. Open the login page"));
        assert!(csv.contains("2. Submit valid credentials"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let csv = test_cases_to_csv(&[sample_case()]).unwrap();
        assert!(csv.contains(r#""Valid login with ""remember me""""#));
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let csv = test_cases_to_csv(&[]).unwrap();
        assert_eq!(csv.trim().lines().count(), 1);
    }
}
