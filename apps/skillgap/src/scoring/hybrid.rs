//! Hybrid Scorer: 70% semantic embedding similarity + 30% TF-IDF similarity.
//!
//! Algorithm, for one query text against N comparison texts:
//! 1. Encode query + comparisons in one batch; cosine(query, each) → semantic.
//! 2. Fit TF-IDF on [query, comparisons...]; cosine(row 0, each) → lexical.
//! 3. hybrid = round(0.7 × semantic + 0.3 × tfidf, 4).
//!
//! Any encoder or vectorizer failure is returned to the caller as-is.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::embedding::SentenceEncoder;
use crate::scoring::similarity::cosine_similarity;
use crate::scoring::tfidf::{TfidfConfig, TfidfVectorizer};
use crate::scoring::{round_to, ScoringError};

pub const SEMANTIC_WEIGHT: f64 = 0.7;
pub const TFIDF_WEIGHT: f64 = 0.3;

/// `round(0.7 × semantic + 0.3 × tfidf, 4)`.
pub fn combine_scores(semantic: f64, tfidf: f64) -> f64 {
    round_to(SEMANTIC_WEIGHT * semantic + TFIDF_WEIGHT * tfidf, 4)
}

/// Converts a 0–1 score to a 0–100 percentage with two decimals.
pub fn to_percentage(score: f64) -> f64 {
    round_to(score * 100.0, 2)
}

/// Raw component scores for one comparison. `semantic` and `tfidf` are unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridScore {
    pub semantic: f64,
    pub tfidf: f64,
    pub hybrid: f64,
}

impl HybridScore {
    pub fn new(semantic: f64, tfidf: f64) -> Self {
        Self {
            semantic,
            tfidf,
            hybrid: combine_scores(semantic, tfidf),
        }
    }
}

/// Resume-vs-JD comparison result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub semantic_score: f64,
    pub tfidf_score: f64,
    pub hybrid_score: f64,
    /// Share of JD skills present in the resume, 0–100.
    pub match_percentage: f64,
}

#[derive(Clone)]
pub struct HybridScorer {
    encoder: Arc<dyn SentenceEncoder>,
}

impl HybridScorer {
    pub fn new(encoder: Arc<dyn SentenceEncoder>) -> Self {
        Self { encoder }
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    /// Semantic similarity of `query` against each of `others`, in [0, 1].
    pub async fn semantic_scores(
        &self,
        query: &str,
        others: &[String],
    ) -> Result<Vec<f64>, ScoringError> {
        let mut batch = Vec::with_capacity(others.len() + 1);
        batch.push(query.to_string());
        batch.extend(others.iter().cloned());

        let vectors = self.encoder.encode(&batch).await?;
        if vectors.len() != batch.len() {
            return Err(ScoringError::EmbeddingCount {
                expected: batch.len(),
                got: vectors.len(),
            });
        }

        let (query_vec, rest) = vectors
            .split_first()
            .ok_or(ScoringError::EmptyInput("no embeddings returned"))?;
        // Opposed embeddings count as unrelated, keeping every score in [0, 1].
        Ok(rest
            .iter()
            .map(|v| cosine_similarity(query_vec, v).max(0.0))
            .collect())
    }

    /// TF-IDF similarity of `query` against each of `others`, fitted on all of them.
    pub fn tfidf_scores(
        query: &str,
        others: &[String],
        config: TfidfConfig,
    ) -> Result<Vec<f64>, ScoringError> {
        let mut corpus = Vec::with_capacity(others.len() + 1);
        corpus.push(query);
        corpus.extend(others.iter().map(String::as_str));

        let matrix = TfidfVectorizer::new(config).fit_transform(&corpus)?;
        debug!(
            "Fitted TF-IDF over {} documents, {} terms",
            corpus.len(),
            matrix.n_terms()
        );
        Ok(matrix.similarities_to_first())
    }

    /// Hybrid scores of `query` against each of `others`, in input order.
    pub async fn score_texts(
        &self,
        query: &str,
        others: &[String],
        tfidf_config: TfidfConfig,
    ) -> Result<Vec<HybridScore>, ScoringError> {
        if others.is_empty() {
            return Err(ScoringError::EmptyInput("no comparison texts"));
        }

        let semantic = self.semantic_scores(query, others).await?;
        let lexical = Self::tfidf_scores(query, others, tfidf_config)?;

        debug!(
            "Scored {} comparisons with encoder {}",
            others.len(),
            self.encoder_name()
        );

        Ok(semantic
            .into_iter()
            .zip(lexical)
            .map(|(s, t)| HybridScore::new(s, t))
            .collect())
    }

    /// Compares a resume's skills with a JD's skills.
    ///
    /// Overlap is computed case-insensitively; skill lists are lowercased in the output.
    pub async fn match_resume_to_jd(
        &self,
        resume_skills: &[String],
        jd_skills: &[String],
    ) -> Result<MatchResult, ScoringError> {
        let resume_text = resume_skills.join(" ");
        let jd_text = jd_skills.join(" ");

        let score = self
            .score_texts(&resume_text, &[jd_text], TfidfConfig::default())
            .await?
            .into_iter()
            .next()
            .ok_or(ScoringError::EmptyInput("no score returned"))?;

        let resume_set: BTreeSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
        let jd_set: BTreeSet<String> = jd_skills.iter().map(|s| s.to_lowercase()).collect();

        let matched_skills: Vec<String> = jd_set.intersection(&resume_set).cloned().collect();
        let missing_skills: Vec<String> = jd_set.difference(&resume_set).cloned().collect();

        let match_percentage = if jd_set.is_empty() {
            0.0
        } else {
            round_to(matched_skills.len() as f64 / jd_set.len() as f64 * 100.0, 2)
        };

        Ok(MatchResult {
            matched_skills,
            missing_skills,
            semantic_score: round_to(score.semantic, 4),
            tfidf_score: round_to(score.tfidf, 4),
            hybrid_score: score.hybrid,
            match_percentage,
        })
    }
}
