pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::parsing::handlers as parsing;
use crate::recommender::handlers as jobs;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing
        .route("/api/v1/skills/extract", post(parsing::handle_extract_skills))
        .route("/api/v1/parse-jd", post(parsing::handle_parse_jd))
        .route("/api/v1/parse-resume", post(parsing::handle_parse_resume))
        // Matching & scoring
        .route("/api/v1/match-skills", post(analysis::handle_match_skills))
        .route(
            "/api/v1/match-jd-resume",
            post(analysis::handle_match_jd_resume),
        )
        .route("/api/v1/ats-score", post(analysis::handle_ats_score))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/full-process", post(analysis::handle_full_process))
        // Job recommendations
        .route("/api/v1/jobs/recommend", post(jobs::handle_recommend))
        .route("/api/v1/jobs/compare", post(jobs::handle_compare))
        // Roadmaps
        .route(
            "/api/v1/roadmap/generate",
            post(roadmap::handle_generate_roadmap),
        )
        .route(
            "/api/v1/roadmap/personalized",
            post(roadmap::handle_personalized_roadmap),
        )
        .route(
            "/api/v1/roadmap/preview",
            post(roadmap::handle_roadmap_preview),
        )
        .with_state(state)
}
