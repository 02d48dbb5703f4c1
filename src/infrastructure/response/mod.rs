use once_cell::sync::Lazy;
use regex::Regex;

static THINK_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<think>[\s\S]*?</think>|<think\s*/>").unwrap());

static REASONING_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<reasoning>[\s\S]*?</reasoning>").unwrap());

static MULTIPLE_NEWLINES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Cleans a free-text model reply by removing reasoning artifacts.
pub fn clean_llm_response(response: &str) -> String {
    let mut cleaned = response.to_string();

    cleaned = THINK_TAG_PATTERN.replace_all(&cleaned, "").to_string();
    cleaned = REASONING_TAG_PATTERN.replace_all(&cleaned, "").to_string();
    cleaned = cleaned.trim().to_string();
    cleaned = MULTIPLE_NEWLINES_PATTERN
        .replace_all(&cleaned, "\n\n")
        .to_string();

    cleaned
}

/// JSON-mode replies sometimes arrive wrapped in a Markdown code fence even
/// when a schema was requested. Strip the fence before parsing.
pub fn extract_json_payload(output: &str) -> String {
    strip_code_fence(output.trim())
}

fn strip_code_fence(value: &str) -> String {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix("```json") {
        return stripped.trim().trim_end_matches("```").trim().to_string();
    }
    if let Some(stripped) = trimmed.strip_prefix("```") {
        return stripped.trim().trim_end_matches("```").trim().to_string();
    }
    trimmed.to_string()
}
