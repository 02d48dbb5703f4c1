pub mod classify;
pub mod gemini;

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::invocation::ModelInvocationSpec;

/// Single external capability the core depends on: one model call against one
/// concrete model id. Fallback across candidates lives above this seam.
#[async_trait]
pub trait ModelClient {
    async fn generate(&self, model_id: &str, spec: &ModelInvocationSpec) -> Result<String>;
}
