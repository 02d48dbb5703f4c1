use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::error::{AppError, Result};
use crate::domain::invocation::ModelInvocationSpec;
use crate::infrastructure::llm_clients::ModelClient;

/// Runs one invocation spec against its ranked candidate list. Transient
/// failures (and per-call timeouts) move the chain to the next candidate;
/// permanent failures propagate at once with their message intact.
pub struct FallbackInvoker {
    client: Arc<dyn ModelClient + Send + Sync>,
    timeout: Duration,
}

impl FallbackInvoker {
    pub fn new(client: Arc<dyn ModelClient + Send + Sync>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub async fn execute(&self, spec: &ModelInvocationSpec) -> Result<String> {
        if spec.candidates.is_empty() {
            return Err(AppError::ValidationError(
                "Model candidate list is empty.".to_string(),
            ));
        }

        for model_id in &spec.candidates {
            match tokio::time::timeout(self.timeout, self.client.generate(model_id, spec)).await {
                Ok(Ok(text)) => return Ok(text),
                Ok(Err(error)) if error.is_retryable() => {
                    warn!("{} busy, switching to next candidate: {}", model_id, error);
                }
                Ok(Err(error)) => return Err(error),
                Err(_) => {
                    warn!(
                        "{} did not answer within {:?}, switching to next candidate",
                        model_id, self.timeout
                    );
                }
            }
        }

        Err(AppError::ModelsExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::testing::ScriptedClient;

    fn spec(candidates: &[&str]) -> ModelInvocationSpec {
        ModelInvocationSpec::new(
            "prompt",
            candidates.iter().map(|c| c.to_string()).collect(),
        )
    }

    fn invoker(client: Arc<ScriptedClient>) -> FallbackInvoker {
        FallbackInvoker::new(client, Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_first_candidate_success_stops_the_chain() {
        let client = Arc::new(ScriptedClient::replying(|_| Ok("answer".to_string())));
        let result = invoker(client.clone())
            .execute(&spec(&["fast", "slow"]))
            .await
            .unwrap();
        assert_eq!(result, "answer");
        assert_eq!(client.models_called(), vec!["fast"]);
    }

    #[tokio::test]
    async fn test_non_retryable_error_fails_fast() {
        let client = Arc::new(ScriptedClient::replying(|_| {
            Err(AppError::ModelError(
                "API error (400): Invalid JSON payload received.".to_string(),
            ))
        }));
        let error = invoker(client.clone())
            .execute(&spec(&["fast", "slow", "slower"]))
            .await
            .unwrap_err();
        assert_eq!(client.models_called(), vec!["fast"]);
        assert!(error.to_string().contains("Invalid JSON payload received."));
    }

    #[tokio::test]
    async fn test_all_retryable_exhausts_in_list_order() {
        let client = Arc::new(ScriptedClient::replying(|_| {
            Err(AppError::ModelBusy("API error (429): quota".to_string()))
        }));
        let error = invoker(client.clone())
            .execute(&spec(&["fast", "slow", "slower"]))
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::ModelsExhausted));
        assert_eq!(client.models_called(), vec!["fast", "slow", "slower"]);
    }

    #[tokio::test]
    async fn test_retryable_then_success_uses_second_candidate() {
        let client = Arc::new(ScriptedClient::replying(|call| {
            if call.model_id == "fast" {
                Err(AppError::ModelBusy("API error (503): overloaded".to_string()))
            } else {
                Ok("from slow".to_string())
            }
        }));
        let result = invoker(client.clone())
            .execute(&spec(&["fast", "slow"]))
            .await
            .unwrap();
        assert_eq!(result, "from slow");
        assert_eq!(client.models_called(), vec!["fast", "slow"]);
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_a_validation_error() {
        let client = Arc::new(ScriptedClient::replying(|_| Ok("unreached".to_string())));
        let error = invoker(client.clone()).execute(&spec(&[])).await.unwrap_err();
        assert!(matches!(error, AppError::ValidationError(_)));
        assert!(client.models_called().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_as_retryable() {
        let client = Arc::new(
            ScriptedClient::replying(|call| {
                if call.model_id == "hanging" {
                    Ok("too late".to_string())
                } else {
                    Ok("fallback answer".to_string())
                }
            })
            .with_delay(|call| {
                if call.model_id == "hanging" {
                    Duration::from_secs(600)
                } else {
                    Duration::ZERO
                }
            }),
        );
        let result = invoker(client.clone())
            .execute(&spec(&["hanging", "responsive"]))
            .await
            .unwrap();
        assert_eq!(result, "fallback answer");
        assert_eq!(client.models_called(), vec!["hanging", "responsive"]);
    }
}
