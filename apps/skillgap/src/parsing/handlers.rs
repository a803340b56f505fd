use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::parsing::jd_weighter::{weight_jd_skills, SkillWeightMap};
use crate::parsing::resume::parse_resume;
use crate::parsing::skill_extractor::extract_skills;
use crate::parsing::upload::ResumeUpload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub status: &'static str,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParseJdRequest {
    pub jd_text: Option<String>,
}

#[derive(Serialize)]
pub struct ParseJdResponse {
    pub status: &'static str,
    pub jd_skill_weights: SkillWeightMap,
}

#[derive(Serialize)]
pub struct ParseResumeResponse {
    pub status: &'static str,
    pub resume_skills: Vec<String>,
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let text = req
        .text
        .ok_or_else(|| AppError::Validation("text is required".to_string()))?;
    let skills = extract_skills(&text, state.vocabulary.skills());
    Ok(Json(ExtractResponse {
        status: "success",
        skills: skills.into_iter().collect(),
    }))
}

/// POST /api/v1/parse-jd
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(req): Json<ParseJdRequest>,
) -> Result<Json<ParseJdResponse>, AppError> {
    let jd_text = req
        .jd_text
        .ok_or_else(|| AppError::Validation("jd_text is required".to_string()))?;
    Ok(Json(ParseJdResponse {
        status: "success",
        jd_skill_weights: weight_jd_skills(&jd_text, state.vocabulary.skills()),
    }))
}

/// POST /api/v1/parse-resume (multipart: `file`)
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let upload = ResumeUpload::from_multipart(multipart).await?;
    let skills = parse_resume(&upload.filename, &upload.bytes, state.vocabulary.skills())?;
    Ok(Json(ParseResumeResponse {
        status: "success",
        resume_skills: skills.into_iter().collect(),
    }))
}
