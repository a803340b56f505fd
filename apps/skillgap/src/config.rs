use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which sentence encoder backs the semantic half of the hybrid score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingBackend {
    /// Deterministic feature hashing, no model server required.
    Hashing,
    /// Remote embedding model served by Ollama.
    Ollama,
}

impl FromStr for EmbeddingBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hashing" | "hash" => Ok(Self::Hashing),
            "ollama" => Ok(Self::Ollama),
            other => Err(anyhow!("unknown EMBEDDING_BACKEND '{other}' (expected hashing|ollama)")),
        }
    }
}

/// Where roadmap subtopics come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtopicBackend {
    Static,
    Ollama,
}

impl FromStr for SubtopicBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "ollama" | "llm" => Ok(Self::Ollama),
            other => Err(anyhow!("unknown SUBTOPIC_BACKEND '{other}' (expected static|ollama)")),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skills_csv_path: String,
    pub jobs_catalog_path: String,
    pub embedding_backend: EmbeddingBackend,
    pub embedding_dimension: usize,
    pub ollama_url: String,
    pub embedding_model: String,
    pub subtopic_backend: SubtopicBackend,
    pub llm_model: String,
    pub enable_resource_enrichment: bool,
    pub youtube_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            skills_csv_path: env_or("SKILLS_CSV_PATH", "data/skills.csv"),
            jobs_catalog_path: env_or("JOBS_CATALOG_PATH", "data/sample_jds.json"),
            embedding_backend: env_or("EMBEDDING_BACKEND", "hashing").parse()?,
            embedding_dimension: env_or("EMBEDDING_DIMENSION", "384")
                .parse::<usize>()
                .context("EMBEDDING_DIMENSION must be a positive integer")?,
            ollama_url: env_or("OLLAMA_URL", "http://localhost:11434"),
            embedding_model: env_or("EMBEDDING_MODEL", "all-minilm"),
            subtopic_backend: env_or("SUBTOPIC_BACKEND", "static").parse()?,
            llm_model: env_or("LLM_MODEL", "llama3"),
            enable_resource_enrichment: parse_flag(&env_or(
                "ENABLE_RESOURCE_ENRICHMENT",
                "false",
            ))
            .context("ENABLE_RESOURCE_ENRICHMENT must be true or false")?,
            youtube_api_key: std::env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("invalid boolean '{other}'")),
    }
}
