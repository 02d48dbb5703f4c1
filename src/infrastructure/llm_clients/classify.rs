use crate::domain::error::AppError;

/// Sorts a provider failure into the retry taxonomy at the boundary where it
/// enters the core: rate limiting, quota exhaustion and overload become
/// `ModelBusy` (the fallback chain moves on to the next candidate),
/// everything else becomes a permanent `ModelError` with the message intact.
pub fn classify_provider_error(status: u16, body: &str) -> AppError {
    let message = format!("API error ({}): {}", status, body);
    if is_retryable(status, body) {
        AppError::ModelBusy(message)
    } else {
        AppError::ModelError(message)
    }
}

fn is_retryable(status: u16, body: &str) -> bool {
    if status == 429 || status == 503 {
        return true;
    }
    let lower = body.to_lowercase();
    lower.contains("quota")
        || lower.contains("overloaded")
        || lower.contains("resource_exhausted")
        || lower.contains("unavailable")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Recorded Gemini error bodies.
    const RATE_LIMIT_BODY: &str = r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#;
    const OVERLOADED_BODY: &str = r#"{"error":{"code":503,"message":"The model is overloaded. Please try again later.","status":"UNAVAILABLE"}}"#;
    const OVERLOADED_500_BODY: &str = r#"{"error":{"code":500,"message":"The model is overloaded.","status":"INTERNAL"}}"#;
    const BAD_REQUEST_BODY: &str = r#"{"error":{"code":400,"message":"Invalid JSON payload received.","status":"INVALID_ARGUMENT"}}"#;
    const BAD_KEY_BODY: &str = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
    const FORBIDDEN_BODY: &str = r#"{"error":{"code":403,"message":"Permission denied.","status":"PERMISSION_DENIED"}}"#;

    #[test]
    fn test_rate_limit_is_retryable() {
        assert!(classify_provider_error(429, RATE_LIMIT_BODY).is_retryable());
    }

    #[test]
    fn test_service_unavailable_is_retryable() {
        assert!(classify_provider_error(503, OVERLOADED_BODY).is_retryable());
    }

    #[test]
    fn test_overloaded_text_is_retryable_regardless_of_status() {
        assert!(classify_provider_error(500, OVERLOADED_500_BODY).is_retryable());
    }

    #[test]
    fn test_bad_request_is_permanent() {
        assert!(!classify_provider_error(400, BAD_REQUEST_BODY).is_retryable());
    }

    #[test]
    fn test_auth_failures_are_permanent() {
        assert!(!classify_provider_error(400, BAD_KEY_BODY).is_retryable());
        assert!(!classify_provider_error(403, FORBIDDEN_BODY).is_retryable());
    }

    #[test]
    fn test_message_is_preserved() {
        let error = classify_provider_error(400, BAD_REQUEST_BODY);
        let rendered = error.to_string();
        assert!(rendered.contains("400"));
        assert!(rendered.contains("Invalid JSON payload received."));
    }
}
