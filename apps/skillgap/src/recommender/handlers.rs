use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::recommender::{
    compare_methods, recommend_jobs, MethodComparison, Recommendations, DEFAULT_TOP_N,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
}

fn require_skills(skills: &[String]) -> Result<(), AppError> {
    if skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("resume_skills is required".to_string()));
    }
    Ok(())
}

/// POST /api/v1/jobs/recommend
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<Recommendations>, AppError> {
    require_skills(&req.resume_skills)?;
    let top_n = req.top_n.unwrap_or(DEFAULT_TOP_N);
    if top_n == 0 {
        return Err(AppError::Validation("top_n must be at least 1".to_string()));
    }
    let recs = recommend_jobs(&state.scorer, &req.resume_skills, &state.catalog, top_n).await?;
    Ok(Json(recs))
}

/// POST /api/v1/jobs/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<MethodComparison>, AppError> {
    require_skills(&req.resume_skills)?;
    let comparison = compare_methods(&state.scorer, &req.resume_skills, &state.catalog).await?;
    Ok(Json(comparison))
}
