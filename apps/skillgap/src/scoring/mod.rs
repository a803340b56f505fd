//! Similarity scoring: semantic (embedding) and lexical (TF-IDF) similarity,
//! their 0.7 / 0.3 hybrid, and the weighted ATS skill score.

pub mod ats;
pub mod embedding;
pub mod hybrid;
pub mod similarity;
pub mod tfidf;

use thiserror::Error;

/// Failures from the encoder or vectorizer. Never replaced by a default score.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding failed: {0}")]
    Embedding(String),

    #[error("embedding backend returned {got} vectors for {expected} texts")]
    EmbeddingCount { expected: usize, got: usize },

    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,

    #[error("nothing to compare: {0}")]
    EmptyInput(&'static str),
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
