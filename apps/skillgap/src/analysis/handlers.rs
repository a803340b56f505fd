use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::{analyze_texts, process_resume, AnalysisReport, ProcessedResume};
use crate::errors::AppError;
use crate::parsing::jd_weighter::{weight_jd_skills, SkillWeightMap};
use crate::parsing::resume::parse_resume;
use crate::parsing::upload::ResumeUpload;
use crate::scoring::ats::{compute_ats_score, AtsScore, SkillMatchMode};
use crate::scoring::hybrid::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchSkillsRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub jd_skills: Vec<String>,
}

#[derive(Serialize)]
pub struct MatchSkillsResponse {
    pub status: &'static str,
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub match_result: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    #[serde(default)]
    pub jd_skill_weights: SkillWeightMap,
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub case_insensitive: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub jd_text: Option<String>,
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

/// POST /api/v1/match-skills
pub async fn handle_match_skills(
    State(state): State<AppState>,
    Json(req): Json<MatchSkillsRequest>,
) -> Result<Json<MatchSkillsResponse>, AppError> {
    if req.resume_skills.is_empty() {
        return Err(AppError::Validation(
            "resume_skills must be a non-empty list".to_string(),
        ));
    }
    if req.jd_skills.is_empty() {
        return Err(AppError::Validation(
            "jd_skills must be a non-empty list".to_string(),
        ));
    }

    let match_result = state
        .scorer
        .match_resume_to_jd(&req.resume_skills, &req.jd_skills)
        .await?;

    Ok(Json(MatchSkillsResponse {
        status: "success",
        resume_skills: req.resume_skills,
        jd_skills: req.jd_skills,
        match_result,
    }))
}

/// POST /api/v1/match-jd-resume (multipart: `file`, `jd_text`)
pub async fn handle_match_jd_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchSkillsResponse>, AppError> {
    let upload = ResumeUpload::from_multipart(multipart).await?;
    let jd_text = required(upload.field("jd_text"), "jd_text")?;

    let resume_skills: Vec<String> =
        parse_resume(&upload.filename, &upload.bytes, state.vocabulary.skills())?
            .into_iter()
            .collect();
    let jd_skills: Vec<String> = weight_jd_skills(jd_text, state.vocabulary.skills())
        .into_keys()
        .collect();

    let match_result = state
        .scorer
        .match_resume_to_jd(&resume_skills, &jd_skills)
        .await?;

    Ok(Json(MatchSkillsResponse {
        status: "success",
        resume_skills,
        jd_skills,
        match_result,
    }))
}

/// POST /api/v1/ats-score
pub async fn handle_ats_score(Json(req): Json<AtsScoreRequest>) -> Result<Json<AtsScore>, AppError> {
    let mode = if req.case_insensitive {
        SkillMatchMode::CaseInsensitive
    } else {
        SkillMatchMode::Exact
    };
    Ok(Json(compute_ats_score(
        &req.jd_skill_weights,
        req.resume_skills.as_slice(),
        mode,
    )))
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let resume_text = required(req.resume_text, "resume_text")?;
    let jd_text = required(req.jd_text, "jd_text")?;
    let report = analyze_texts(&state, &resume_text, &jd_text).await?;
    Ok(Json(report))
}

/// POST /api/v1/full-process (multipart: `file`, optional `jd_text`)
pub async fn handle_full_process(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessedResume>, AppError> {
    let upload = ResumeUpload::from_multipart(multipart).await?;
    let resume_skills: Vec<String> =
        parse_resume(&upload.filename, &upload.bytes, state.vocabulary.skills())?
            .into_iter()
            .collect();

    let processed = process_resume(&state, resume_skills, upload.field("jd_text")).await?;
    Ok(Json(processed))
}
