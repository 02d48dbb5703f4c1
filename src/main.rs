use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use tracing::info;

use ziaraqa::application::use_cases::history::HistoryStore;
use ziaraqa::application::use_cases::router::GenerationRouter;
use ziaraqa::infrastructure::config::AppConfig;
use ziaraqa::infrastructure::llm_clients::gemini::GeminiClient;
use ziaraqa::interfaces::http::{start_server, HttpState};

fn into_io_error(error: ziaraqa::domain::error::AppError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, error.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load().map_err(into_io_error)?;
    let provider = config.provider().map_err(into_io_error)?;
    let settings = config.generation_settings();

    let client = Arc::new(GeminiClient::new(
        provider,
        Duration::from_secs(settings.request_timeout_secs),
    ));
    let state = web::Data::new(HttpState {
        router: GenerationRouter::new(client, settings),
        history: Arc::new(HistoryStore::new()),
    });

    info!(
        "Backend running on http://{}:{}",
        config.server.host, config.server.port
    );
    start_server(state, &config.server)?.await
}
