use std::sync::Arc;

use crate::parsing::vocabulary::SkillVocabulary;
use crate::recommender::catalog::JobCatalog;
use crate::roadmap::resources::ResourceFetcher;
use crate::roadmap::subtopics::SubtopicProvider;
use crate::scoring::hybrid::HybridScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub vocabulary: Arc<SkillVocabulary>,
    pub catalog: Arc<JobCatalog>,
    /// Hybrid scorer over the encoder picked by EMBEDDING_BACKEND.
    pub scorer: HybridScorer,
    /// Pluggable subtopic source. Default: StaticSubtopics. Swap via SUBTOPIC_BACKEND.
    pub subtopics: Arc<dyn SubtopicProvider>,
    pub resources: ResourceFetcher,
}
