use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmap::builder::{
    build_course_roadmaps, build_personalized_roadmap, preview_roadmap, CourseRoadmap, Deadline,
    PersonalizedRoadmap, PersonalizedRoadmapRequest, RoadmapPreview, DEFAULT_DAYS,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub skills: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct CourseRoadmapResponse {
    pub status: &'static str,
    pub roadmap: BTreeMap<String, CourseRoadmap>,
}

#[derive(Serialize)]
pub struct PersonalizedRoadmapResponse {
    pub status: &'static str,
    pub roadmap: PersonalizedRoadmap,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub jd_skills: Vec<String>,
    pub deadline: Option<Deadline>,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub preview: RoadmapPreview,
}

/// POST /api/v1/roadmap/generate
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(req): Json<GenerateRoadmapRequest>,
) -> Result<Json<CourseRoadmapResponse>, AppError> {
    let skills = req
        .skills
        .ok_or_else(|| AppError::Validation("skills list is required".to_string()))?;

    let roadmap =
        build_course_roadmaps(&skills, state.subtopics.as_ref(), &state.resources).await;
    Ok(Json(CourseRoadmapResponse {
        status: "success",
        roadmap,
    }))
}

/// POST /api/v1/roadmap/personalized
pub async fn handle_personalized_roadmap(
    State(state): State<AppState>,
    Json(req): Json<PersonalizedRoadmapRequest>,
) -> Result<Json<PersonalizedRoadmapResponse>, AppError> {
    if req.jd_skills.is_empty() {
        return Err(AppError::Validation("jd_skills cannot be empty".to_string()));
    }
    if let Some(Deadline::Days(days)) = req.deadline {
        if days <= 0 {
            return Err(AppError::Validation(
                "deadline days must be greater than 0".to_string(),
            ));
        }
    }

    let now = Local::now().naive_local();
    let roadmap = build_personalized_roadmap(&req, state.subtopics.as_ref(), now).await;
    Ok(Json(PersonalizedRoadmapResponse {
        status: "success",
        roadmap,
    }))
}

/// POST /api/v1/roadmap/preview
pub async fn handle_roadmap_preview(
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    if req.jd_skills.is_empty() {
        return Err(AppError::Validation("jd_skills required".to_string()));
    }

    // Only a day count is honoured here; dates need the full roadmap.
    let days = match req.deadline {
        Some(Deadline::Days(days)) if days > 0 => days.min(u32::MAX as i64) as u32,
        _ => DEFAULT_DAYS,
    };

    Ok(Json(PreviewResponse {
        status: "success",
        preview: preview_roadmap(&req.resume_skills, &req.jd_skills, days),
    }))
}
