use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{delete, dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::application::use_cases::csv_export::test_cases_to_csv;
use crate::application::use_cases::history::HistoryStore;
use crate::application::use_cases::router::{GenerationRouter, RoutedResponse};
use crate::domain::error::AppError;
use crate::domain::generation_request::GenerationRequest;
use crate::domain::history::GenerationKind;
use crate::domain::test_assets::{StoryGeneration, TestCase};
use crate::infrastructure::config::ServerConfig;

pub struct HttpState {
    pub router: GenerationRouter,
    pub history: Arc<HistoryStore>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExportRequest {
    pub test_cases: Vec<TestCase>,
}

fn error_response(error: &AppError) -> HttpResponse {
    match error {
        AppError::ValidationError(_) => {
            HttpResponse::BadRequest().json(json!({ "error": error.to_string() }))
        }
        AppError::ModelsExhausted => HttpResponse::ServiceUnavailable().json(json!({
            "error": "Service busy, try again later.",
            "details": error.to_string(),
        })),
        AppError::ModelError(_) | AppError::ModelBusy(_) | AppError::ParseError(_) => {
            HttpResponse::BadGateway().json(json!({
                "error": "Failed",
                "details": error.to_string(),
            }))
        }
        _ => HttpResponse::InternalServerError().json(json!({
            "error": "Failed",
            "details": error.to_string(),
        })),
    }
}

/// Raw model JSON goes out as a parsed value; if it does not parse it is
/// framed under "result" instead of being dropped.
fn json_payload_response(raw: String) -> HttpResponse {
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(_) => HttpResponse::Ok().json(json!({ "result": raw })),
    }
}

#[get("/")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("ZiaraQA backend running")
}

#[post("/generate")]
async fn generate(
    data: web::Data<HttpState>,
    request: web::Json<GenerationRequest>,
) -> impl Responder {
    let request = request.into_inner();
    let story_for_history = match &request {
        GenerationRequest::TestCases { user_story, .. } => Some(user_story.clone()),
        _ => None,
    };
    let artifact_for_history = match &request {
        GenerationRequest::SyntheticData { prompt } => {
            Some((GenerationKind::SyntheticData, prompt.clone()))
        }
        GenerationRequest::UnitTests { code, .. } => Some((GenerationKind::UnitTest, code.clone())),
        GenerationRequest::ApiTests { input } => Some((GenerationKind::ApiTest, input.clone())),
        _ => None,
    };

    match data.router.route(request).await {
        Ok(RoutedResponse::Story(StoryGeneration::Complete(response))) => {
            if let Some(user_story) = story_for_history {
                data.history.record_story(&user_story, &response);
            }
            HttpResponse::Ok().json(response)
        }
        Ok(RoutedResponse::Story(StoryGeneration::InvalidInput { title })) => {
            info!("Rejected non-testable story: {}", title);
            HttpResponse::UnprocessableEntity().json(json!({
                "error": "Please enter a valid user story.",
                "details": title,
            }))
        }
        Ok(RoutedResponse::Analysis(analysis)) => HttpResponse::Ok().json(analysis),
        Ok(RoutedResponse::SyntheticData(raw)) | Ok(RoutedResponse::ApiTests(raw)) => {
            if let Some((kind, prompt)) = artifact_for_history {
                data.history.record_artifact(kind, &prompt, &raw);
            }
            json_payload_response(raw)
        }
        Ok(RoutedResponse::UnitTests(text)) => {
            if let Some((kind, prompt)) = artifact_for_history {
                data.history.record_artifact(kind, &prompt, &text);
            }
            HttpResponse::Ok().json(json!({ "result": text }))
        }
        Ok(RoutedResponse::Chat(reply)) => HttpResponse::Ok().json(json!({ "result": reply })),
        Err(e) => {
            error!("Generation failed: {}", e);
            error_response(&e)
        }
    }
}

#[get("/history")]
async fn list_history(data: web::Data<HttpState>) -> impl Responder {
    HttpResponse::Ok().json(data.history.list())
}

#[delete("/history")]
async fn clear_history(data: web::Data<HttpState>) -> impl Responder {
    data.history.clear();
    HttpResponse::NoContent().finish()
}

#[post("/export/csv")]
async fn export_csv(request: web::Json<CsvExportRequest>) -> impl Responder {
    match test_cases_to_csv(&request.test_cases) {
        Ok(csv) => {
            let file_name = format!("test_cases_{}.csv", chrono::Utc::now().format("%Y-%m-%d"));
            HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", file_name),
                ))
                .body(csv)
        }
        Err(e) => {
            error!("CSV export failed: {}", e);
            error_response(&e)
        }
    }
}

pub fn start_server(state: web::Data<HttpState>, config: &ServerConfig) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(health)
            .service(
                web::scope("/api")
                    .service(generate)
                    .service(list_history)
                    .service(clear_history)
                    .service(export_csv),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
