// Axum API Server Module
//
// Purpose: JSON surface over the pure extract -> recommend pipeline for the
// chat widget and form-based callers. Results are memoised per context.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::context::{extract, SoilClimateContext};
use crate::conversation::{compose_reply, QUICK_QUESTIONS};
use crate::engine::{advise_context, Advice, RecommendationResult};

/// Upper bound on texts per batch request
pub const MAX_BATCH_TEXTS: usize = 100;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Advice memoised on context value
    pub cache: Cache<String, Arc<Advice>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!(
            capacity = config.cache_capacity,
            ttl_secs = config.cache_ttl.as_secs(),
            "Initializing Moka cache..."
        );
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            config: Arc::new(config),
            cache,
        }
    }

    /// Advice for a context, served from cache when possible
    pub async fn advice_for(&self, context: SoilClimateContext) -> Arc<Advice> {
        let cache_key = context.cache_key();

        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!("Cache hit for {}", cache_key);
            return cached;
        }

        let advice = Arc::new(advise_context(context));
        self.cache.insert(cache_key, advice.clone()).await;
        advice
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Chat widget
        .route("/api/quick-questions", get(quick_questions))
        .route("/api/chat", post(chat))

        // Pipeline endpoints
        .route("/api/context", post(extract_context))
        .route("/api/recommend", post(recommend_text))
        .route("/api/recommend/context", post(recommend_context))
        .route("/api/recommend/batch", post(recommend_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub context: SoilClimateContext,
    pub recommendation: RecommendationResult,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn quick_questions() -> impl IntoResponse {
    Json(serde_json::json!({ "questions": QUICK_QUESTIONS }))
}

async fn extract_context(Json(req): Json<TextRequest>) -> Json<SoilClimateContext> {
    Json(extract(&req.text))
}

async fn recommend_text(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Json<Advice> {
    let advice = state.advice_for(extract(&req.text)).await;
    Json(Advice::clone(&advice))
}

/// Context supplied directly (e.g. a form), no text extraction
async fn recommend_context(
    State(state): State<AppState>,
    Json(context): Json<SoilClimateContext>,
) -> Json<Advice> {
    let advice = state.advice_for(context).await;
    Json(Advice::clone(&advice))
}

/// Batch advice for multiple texts
///
/// POST /api/recommend/batch
/// Body: { "texts": ["sandy soil, low rainfall", ...] }
///
/// RAYON: CPU parallelism via par_iter on a blocking thread (not async tokio::spawn)
async fn recommend_batch(Json(req): Json<BatchRequest>) -> Result<Json<serde_json::Value>, AppError> {
    if req.texts.len() > MAX_BATCH_TEXTS {
        return Err(AppError::BadRequest(format!(
            "at most {} texts per batch (got {})",
            MAX_BATCH_TEXTS,
            req.texts.len()
        )));
    }

    let start = std::time::Instant::now();
    let count = req.texts.len();

    let results = tokio::task::spawn_blocking(move || crate::engine::advise_batch(req.texts.as_slice()))
        .await
        .map_err(|e| AppError::Internal(format!("batch task failed: {}", e)))?;

    tracing::info!("Batch advice for {} texts in {:?}", count, start.elapsed());

    Ok(Json(serde_json::json!({
        "rows": results.len(),
        "results": results,
    })))
}

/// Chat turn: extract, recommend, compose reply, then wait out the
/// configured "thinking" delay before answering.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = req.message.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_string()));
    }

    let context = extract(question);
    let advice = state.advice_for(context).await;
    let reply = compose_reply(&advice.context, &advice.recommendation);

    if !state.config.thinking_delay.is_zero() {
        tokio::time::sleep(state.config.thinking_delay).await;
    }

    Ok(Json(ChatResponse {
        reply,
        context: advice.context,
        recommendation: advice.recommendation.clone(),
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
