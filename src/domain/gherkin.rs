use crate::domain::test_assets::GherkinScenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Given,
    When,
    Then,
    And,
    But,
}

/// Keyword of a step, taken from its first whitespace-delimited token.
pub fn step_keyword(step: &str) -> Option<Keyword> {
    match step.trim().split_whitespace().next()? {
        "Given" => Some(Keyword::Given),
        "When" => Some(Keyword::When),
        "Then" => Some(Keyword::Then),
        "And" => Some(Keyword::And),
        "But" => Some(Keyword::But),
        _ => None,
    }
}

/// Structural findings for one scenario. Findings are reported, not fatal:
/// generation output is passed through unchanged.
pub fn lint_scenario(scenario: &GherkinScenario) -> Vec<String> {
    let mut findings = Vec::new();

    if scenario.steps.is_empty() {
        findings.push(format!("scenario '{}' has no steps", scenario.name));
        return findings;
    }

    let keywords: Vec<Option<Keyword>> = scenario.steps.iter().map(|s| step_keyword(s)).collect();

    for (index, keyword) in keywords.iter().enumerate() {
        if keyword.is_none() {
            findings.push(format!(
                "scenario '{}' step {} does not start with a Gherkin keyword",
                scenario.name,
                index + 1
            ));
        }
    }

    if !matches!(keywords.first(), Some(Some(Keyword::Given))) {
        findings.push(format!(
            "scenario '{}' does not open with Given",
            scenario.name
        ));
    }
    if !keywords.iter().any(|k| matches!(k, Some(Keyword::Then))) {
        findings.push(format!("scenario '{}' has no Then step", scenario.name));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(name: &str, steps: &[&str]) -> GherkinScenario {
        GherkinScenario {
            name: name.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_step_keyword_first_token() {
        assert_eq!(step_keyword("Given a logged-out user"), Some(Keyword::Given));
        assert_eq!(step_keyword("  And the password is wrong"), Some(Keyword::And));
        assert_eq!(step_keyword("The user clicks login"), None);
        assert_eq!(step_keyword(""), None);
    }

    #[test]
    fn test_well_formed_scenario_has_no_findings() {
        let s = scenario(
            "Successful login",
            &[
                "Given a registered user on the login page",
                "When they submit valid credentials",
                "Then the dashboard is shown",
                "And a welcome message appears",
            ],
        );
        assert!(lint_scenario(&s).is_empty());
    }

    #[test]
    fn test_missing_given_and_then_are_reported() {
        let s = scenario("Odd ordering", &["When something happens", "And more happens"]);
        let findings = lint_scenario(&s);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].contains("does not open with Given"));
        assert!(findings[1].contains("no Then step"));
    }

    #[test]
    fn test_unknown_keyword_is_reported() {
        let s = scenario(
            "Free text step",
            &["Given a user", "User clicks the button", "Then it works"],
        );
        let findings = lint_scenario(&s);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("step 2"));
    }

    #[test]
    fn test_empty_scenario() {
        let findings = lint_scenario(&scenario("Empty", &[]));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("no steps"));
    }
}
