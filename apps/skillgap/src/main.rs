mod analysis;
mod config;
mod errors;
mod llm_client;
mod parsing;
mod recommender;
mod roadmap;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, EmbeddingBackend, SubtopicBackend};
use crate::llm_client::LlmClient;
use crate::parsing::vocabulary::SkillVocabulary;
use crate::recommender::catalog::JobCatalog;
use crate::roadmap::resources::ResourceFetcher;
use crate::roadmap::subtopics::{LlmSubtopics, StaticSubtopics, SubtopicProvider};
use crate::routes::build_router;
use crate::scoring::embedding::{HashingEncoder, OllamaEncoder, SentenceEncoder};
use crate::scoring::hybrid::HybridScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on values that do not parse)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillGap API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary and job catalog
    let vocabulary = SkillVocabulary::from_csv_path(&config.skills_csv_path)?;
    let catalog = JobCatalog::from_json_path(&config.jobs_catalog_path)?;
    if vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; extraction will find nothing");
    }

    // Initialize sentence encoder (hashing by default, swap via EMBEDDING_BACKEND)
    let encoder: Arc<dyn SentenceEncoder> = match config.embedding_backend {
        EmbeddingBackend::Hashing => Arc::new(HashingEncoder::new(config.embedding_dimension)),
        EmbeddingBackend::Ollama => Arc::new(
            OllamaEncoder::new(&config.ollama_url, &config.embedding_model)
                .context("failed to build embedding client")?,
        ),
    };
    info!("Sentence encoder initialized ({})", encoder.name());

    // Initialize subtopic provider (static by default, swap via SUBTOPIC_BACKEND)
    let subtopics: Arc<dyn SubtopicProvider> = match config.subtopic_backend {
        SubtopicBackend::Static => Arc::new(StaticSubtopics),
        SubtopicBackend::Ollama => {
            let llm = LlmClient::new(&config.ollama_url, &config.llm_model)
                .context("failed to build LLM client")?;
            Arc::new(LlmSubtopics::new(llm))
        }
    };
    info!("Subtopic provider initialized ({})", subtopics.name());

    let resources = ResourceFetcher::new(
        config.enable_resource_enrichment,
        config.youtube_api_key.clone(),
    )?;
    info!(
        "Resource enrichment {}",
        if resources.is_enabled() { "enabled" } else { "disabled" }
    );

    // Build app state
    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        catalog: Arc::new(catalog),
        scorer: HybridScorer::new(encoder),
        subtopics,
        resources,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
