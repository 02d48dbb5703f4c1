pub mod analysis;
pub mod error;
pub mod generation_request;
pub mod gherkin;
pub mod history;
pub mod invocation;
pub mod llm_config;
pub mod test_assets;
