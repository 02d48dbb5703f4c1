/// One outbound model call: prompt, optional structured-output constraint and
/// the ranked list of model ids to try. Built fresh per call, never mutated.
#[derive(Debug, Clone)]
pub struct ModelInvocationSpec {
    pub prompt: String,
    pub system_instruction: Option<String>,
    /// Ask the provider for a JSON response even without a schema.
    pub json_output: bool,
    pub response_schema: Option<serde_json::Value>,
    pub candidates: Vec<String>,
}

impl ModelInvocationSpec {
    pub fn new(prompt: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            json_output: false,
            response_schema: None,
            candidates,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }

    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.json_output = true;
        self.response_schema = Some(schema);
        self
    }
}
