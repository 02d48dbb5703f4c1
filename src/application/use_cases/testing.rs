use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::invocation::ModelInvocationSpec;
use crate::infrastructure::llm_clients::ModelClient;

/// One recorded model call.
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub model_id: String,
    pub prompt: String,
}

type ReplyFn = dyn Fn(&RecordedCall) -> Result<String> + Send + Sync;
type DelayFn = dyn Fn(&RecordedCall) -> Duration + Send + Sync;

/// Scripted in-memory stand-in for the hosted model API. Records every call
/// and answers from a closure, optionally after a simulated delay.
pub(crate) struct ScriptedClient {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Box<ReplyFn>,
    delay: Option<Box<DelayFn>>,
}

impl ScriptedClient {
    pub fn replying<F>(reply: F) -> Self
    where
        F: Fn(&RecordedCall) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
            delay: None,
        }
    }

    pub fn with_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(&RecordedCall) -> Duration + Send + Sync + 'static,
    {
        self.delay = Some(Box::new(delay));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn models_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.model_id).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn generate(&self, model_id: &str, spec: &ModelInvocationSpec) -> Result<String> {
        let call = RecordedCall {
            model_id: model_id.to_string(),
            prompt: spec.prompt.clone(),
        };
        self.calls.lock().unwrap().push(call.clone());

        if let Some(delay) = &self.delay {
            let pause = delay(&call);
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }

        (self.reply)(&call)
    }
}
