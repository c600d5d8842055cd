//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::classifier::Classification;
use crate::analysis::engine::{CareerAnalysis, CareerEngine};
use crate::analysis::features::FeatureVector;
use crate::analysis::lexicon::Category;
use crate::analysis::recommendations::recommend_for;
use crate::analysis::scoring::CategoryScores;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, alias = "resumeText")]
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub features: FeatureVector,
    pub scores: CategoryScores,
    pub prediction: Category,
    pub confidence: f64,
}

impl From<Classification> for BreakdownResponse {
    fn from(c: Classification) -> Self {
        Self {
            features: c.features,
            scores: c.scores,
            prediction: c.prediction.category,
            confidence: c.prediction.confidence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub category: String,
    pub recommendations: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Classifies the resume into a career category and returns skills, keywords
/// and recommendations for it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<CareerAnalysis>, AppError> {
    let resume_text = require_resume_text(payload)?;
    let chars = resume_text.chars().count();

    let analysis =
        run_blocking(&state.engine, move |engine| engine.analyze(&resume_text)).await?;

    info!(
        chars,
        category = %analysis.prediction,
        confidence = analysis.confidence,
        skills = analysis.skills.len(),
        keywords = analysis.keywords.len(),
        "Resume analyzed"
    );

    Ok(Json(analysis))
}

/// POST /api/v1/resumes/analyze/breakdown
///
/// Returns the feature vector and raw category scores behind a prediction.
pub async fn handle_breakdown(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<BreakdownResponse>, AppError> {
    let resume_text = require_resume_text(payload)?;

    let classification =
        run_blocking(&state.engine, move |engine| engine.classify(&resume_text)).await?;

    info!(
        category = %classification.prediction.category,
        confidence = classification.prediction.confidence,
        "Resume breakdown computed"
    );

    Ok(Json(classification.into()))
}

/// GET /api/v1/recommendations/:category
///
/// Static advice for a category. Unrecognised names get the technology advice.
pub async fn handle_recommendations(
    Path(category): Path<String>,
) -> Json<RecommendationsResponse> {
    let recommendations = recommend_for(&category).to_vec();
    Json(RecommendationsResponse {
        category,
        recommendations,
    })
}

fn require_resume_text(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected analyze request: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    match request.resume_text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => {
            warn!("Rejected analyze request: missing resume_text");
            Err(AppError::InvalidInput("resume_text is required".to_string()))
        }
    }
}

/// Runs CPU-bound engine work off the async executor.
/// A panicked or cancelled task surfaces as an internal error with no partial result.
async fn run_blocking<T, F>(engine: &Arc<CareerEngine>, job: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&CareerEngine) -> Result<T, AppError> + Send + 'static,
{
    let engine = Arc::clone(engine);
    tokio::task::spawn_blocking(move || job(&*engine))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?
}
