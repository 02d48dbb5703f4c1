use std::sync::Arc;
use std::time::Duration;

use crate::application::use_cases::analyze::AnalyzeRequirementsUseCase;
use crate::application::use_cases::api_tests::ApiTestsUseCase;
use crate::application::use_cases::chat::ChatUseCase;
use crate::application::use_cases::fallback::FallbackInvoker;
use crate::application::use_cases::generation::GenerateAssetsUseCase;
use crate::application::use_cases::synthetic_data::SyntheticDataUseCase;
use crate::application::use_cases::unit_tests::UnitTestsUseCase;
use crate::domain::analysis::AnalysisResult;
use crate::domain::error::Result;
use crate::domain::generation_request::GenerationRequest;
use crate::domain::llm_config::GenerationSettings;
use crate::domain::test_assets::StoryGeneration;
use crate::infrastructure::llm_clients::ModelClient;

/// Output of one routed request, one variant per request kind.
#[derive(Debug)]
pub enum RoutedResponse {
    Story(StoryGeneration),
    Analysis(AnalysisResult),
    SyntheticData(String),
    UnitTests(String),
    ApiTests(String),
    Chat(String),
}

/// Dispatches each tagged request to exactly one generator. Stateless across
/// calls; all shared pieces are read-only.
pub struct GenerationRouter {
    generate_assets: GenerateAssetsUseCase,
    analyze: AnalyzeRequirementsUseCase,
    synthetic_data: SyntheticDataUseCase,
    unit_tests: UnitTestsUseCase,
    api_tests: ApiTestsUseCase,
    chat: ChatUseCase,
}

impl GenerationRouter {
    pub fn new(client: Arc<dyn ModelClient + Send + Sync>, settings: GenerationSettings) -> Self {
        let invoker = Arc::new(FallbackInvoker::new(
            client,
            Duration::from_secs(settings.request_timeout_secs),
        ));
        let candidates = settings.model_candidates.clone();

        Self {
            generate_assets: GenerateAssetsUseCase::new(invoker.clone(), settings),
            analyze: AnalyzeRequirementsUseCase::new(invoker.clone(), candidates.clone()),
            synthetic_data: SyntheticDataUseCase::new(invoker.clone(), candidates.clone()),
            unit_tests: UnitTestsUseCase::new(invoker.clone(), candidates.clone()),
            api_tests: ApiTestsUseCase::new(invoker.clone(), candidates.clone()),
            chat: ChatUseCase::new(invoker, candidates),
        }
    }

    pub async fn route(&self, request: GenerationRequest) -> Result<RoutedResponse> {
        match request {
            GenerationRequest::TestCases {
                user_story,
                include_automation,
            } => {
                let outcome = self
                    .generate_assets
                    .execute(&user_story, include_automation)
                    .await?;
                Ok(RoutedResponse::Story(outcome))
            }
            GenerationRequest::Analyze { user_story } => {
                let analysis = self.analyze.execute(&user_story).await?;
                Ok(RoutedResponse::Analysis(analysis))
            }
            GenerationRequest::SyntheticData { prompt } => {
                let data = self.synthetic_data.execute(&prompt).await?;
                Ok(RoutedResponse::SyntheticData(data))
            }
            GenerationRequest::UnitTests { code, framework } => {
                let tests = self.unit_tests.execute(&code, &framework).await?;
                Ok(RoutedResponse::UnitTests(tests))
            }
            GenerationRequest::ApiTests { input } => {
                let collection = self.api_tests.execute(&input).await?;
                Ok(RoutedResponse::ApiTests(collection))
            }
            GenerationRequest::Chat {
                message,
                user_plan,
                context_story,
                test_cases,
            } => {
                let reply = self
                    .chat
                    .execute(
                        &message,
                        user_plan.as_deref(),
                        context_story.as_deref(),
                        &test_cases,
                    )
                    .await?;
                Ok(RoutedResponse::Chat(reply))
            }
        }
    }
}
