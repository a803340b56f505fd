use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and what was loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillgap-api",
        "skills_loaded": state.vocabulary.len(),
        "jobs_loaded": state.catalog.len(),
        "encoder": state.scorer.encoder_name(),
        "subtopics": state.subtopics.name(),
        "resource_enrichment": state.resources.is_enabled(),
    }))
}
