// Axum API Server Module
//
// Purpose: REST API over the Q&A service (question answering, entity
// extraction, source listing, health check)

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::data::Dataset;
use crate::extraction::ExtractedEntities;
use crate::reports::formatters::HtmlFormatter;
use crate::service::QaService;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QaService>,
}

impl AppState {
    /// Build state from the built-in dataset, or from a JSON dataset file.
    pub fn new(dataset_path: Option<&Path>) -> anyhow::Result<Self> {
        let dataset = match dataset_path {
            Some(path) => {
                tracing::info!("Loading dataset from {:?}...", path);
                Dataset::from_json_file(path)?
            }
            None => {
                tracing::info!("Using built-in dataset");
                Dataset::builtin()
            }
        };

        Ok(Self::from_service(QaService::new(dataset)?))
    }

    pub fn from_service(service: QaService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Question answering
        .route("/ask", post(ask_question))

        // Diagnostics (JSON)
        .route("/api/entities", post(extract_entities))
        .route("/api/sources", get(list_sources))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip compression
        .layer(CorsLayer::permissive()) // UI runs on a different origin
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// Query params for /ask
#[derive(Debug, Deserialize)]
pub struct AskQuery {
    /// "markdown" (default) or "html"
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnswerFormat {
    Markdown,
    Html,
}

impl AnswerFormat {
    fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("markdown") | Some("md") => Ok(AnswerFormat::Markdown),
            Some("html") => Ok(AnswerFormat::Html),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unknown format '{}' (expected 'markdown' or 'html')",
                other
            ))),
        }
    }
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let health = state.service.check_health();
    Json(serde_json::json!({
        "status": health.status,
        "service": health.service,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn ask_question(
    State(state): State<AppState>,
    Query(params): Query<AskQuery>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(payload) = payload?;
    let format = AnswerFormat::parse(params.format.as_deref())?;

    let start = std::time::Instant::now();
    let result = state
        .service
        .answer_question(&payload.question)
        .map_err(|e| AppError::Internal(format!("Error processing question: {}", e)))?;
    tracing::debug!("Answered question in {:?}", start.elapsed());

    let mut response = serde_json::to_value(&result)
        .map_err(|e| AppError::Internal(format!("Error processing question: {}", e)))?;

    if format == AnswerFormat::Html {
        if let Some(obj) = response.as_object_mut() {
            obj.insert(
                "answer_html".to_string(),
                serde_json::Value::String(HtmlFormatter::format(&result)),
            );
        }
    }

    Ok(Json(response))
}

async fn extract_entities(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<ExtractedEntities>, AppError> {
    let Json(payload) = payload?;
    Ok(Json(state.service.extract(&payload.question)))
}

async fn list_sources(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.service.sources())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

// Malformed or incomplete JSON bodies get the same error shape as handler errors
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "status": "error",
            "error": message
        }));

        (status, body).into_response()
    }
}
