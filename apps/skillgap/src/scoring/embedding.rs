//! Sentence encoders: the semantic half of the hybrid score.
//!
//! `AppState` holds an `Arc<dyn SentenceEncoder>`, picked at startup from
//! `EMBEDDING_BACKEND`:
//! - `HashingEncoder`: deterministic feature hashing of words and character
//!   trigrams. No model download, stable across runs and Rust versions.
//! - `OllamaEncoder`: a pretrained sentence-embedding model served by Ollama.

use std::hash::{Hash, Hasher};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;
use tracing::debug;

use crate::scoring::ScoringError;

/// Encodes texts into fixed-length vectors. Output order matches input order.
#[async_trait]
pub trait SentenceEncoder: Send + Sync {
    fn name(&self) -> &str;

    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoringError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HashingEncoder
// ────────────────────────────────────────────────────────────────────────────

/// Fixed seed. Changing it changes every embedding.
const HASH_SEED_K0: u64 = 0x5f3c_1a2b_9d4e_7081;
const HASH_SEED_K1: u64 = 0x0e1d_2c3b_4a59_6877;

/// Character trigrams count for less than whole words.
const TRIGRAM_WEIGHT: f32 = 0.5;

pub struct HashingEncoder {
    dimension: usize,
}

impl HashingEncoder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn hash(&self, feature: &str) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        feature.hash(&mut hasher);
        hasher.finish()
    }

    /// Unsigned hashing: every component stays non-negative, so cosine
    /// similarity between two embeddings lies in [0, 1].
    fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let idx = (self.hash(feature) % self.dimension as u64) as usize;
        vector[idx] += weight;
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        let lowered = text.to_lowercase();

        for word in lowered
            .split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
            .map(|w| w.trim_matches('.'))
            .filter(|w| !w.is_empty())
        {
            self.add_feature(&mut vector, &format!("w:{word}"), 1.0);

            let padded: Vec<char> = format!("<{word}>").chars().collect();
            for gram in padded.windows(3) {
                let gram: String = gram.iter().collect();
                self.add_feature(&mut vector, &format!("g:{gram}"), TRIGRAM_WEIGHT);
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl SentenceEncoder for HashingEncoder {
    fn name(&self) -> &str {
        "hashing"
    }

    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        if texts.is_empty() {
            return Err(ScoringError::EmptyInput("no texts to encode"));
        }
        Ok(texts.iter().map(|t| self.embed(t)).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OllamaEncoder
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Sentence embeddings from an Ollama server (`POST /api/embed`).
pub struct OllamaEncoder {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaEncoder {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self, ScoringError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ScoringError::Embedding(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl SentenceEncoder for OllamaEncoder {
    fn name(&self) -> &str {
        &self.model
    }

    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ScoringError> {
        if texts.is_empty() {
            return Err(ScoringError::EmptyInput("no texts to encode"));
        }

        let url = format!("{}/api/embed", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .await
            .map_err(|e| ScoringError::Embedding(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScoringError::Embedding(format!(
                "{url} returned {status}: {body}"
            )));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| ScoringError::Embedding(e.to_string()))?;

        if parsed.embeddings.len() != texts.len() {
            return Err(ScoringError::EmbeddingCount {
                expected: texts.len(),
                got: parsed.embeddings.len(),
            });
        }

        debug!(
            "Encoded {} texts with {} (dim {})",
            texts.len(),
            self.model,
            parsed.embeddings.first().map_or(0, Vec::len)
        );
        Ok(parsed.embeddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::similarity::cosine_similarity;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_hashing_encoder_produces_normalized_vectors() {
        let encoder = HashingEncoder::new(384);
        let vectors = encoder.encode(&texts(&["Python SQL Excel"])).await.unwrap();
        assert_eq!(vectors[0].len(), 384);
        let norm: f32 = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[tokio::test]
    async fn test_hashing_encoder_is_deterministic() {
        let encoder = HashingEncoder::new(128);
        let a = encoder.encode(&texts(&["Node.js Express"])).await.unwrap();
        let b = encoder.encode(&texts(&["Node.js Express"])).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_similar_texts_score_higher() {
        let encoder = HashingEncoder::new(384);
        let v = encoder
            .encode(&texts(&[
                "python sql data analysis",
                "python sql excel data analysis",
                "kubernetes docker linux",
            ]))
            .await
            .unwrap();
        let close = cosine_similarity(&v[0], &v[1]);
        let far = cosine_similarity(&v[0], &v[2]);
        assert!(close > far, "close {close} vs far {far}");
    }

    #[tokio::test]
    async fn test_unrelated_texts_never_score_below_zero() {
        let encoder = HashingEncoder::new(384);
        let vocabulary = texts(&[
            "Python", "Java", "Go", "Figma", "SQL", "Excel", "Docker", "Kubernetes", "AWS",
            "Linux", "Git", "C++", "C#", "Node.js", "React", "Tableau", "Rust", "Scala",
            "Photoshop", "Data Analysis",
        ]);
        let v = encoder.encode(&vocabulary).await.unwrap();
        assert!(v.iter().flatten().all(|x| *x >= 0.0));
        for (i, a) in v.iter().enumerate() {
            for (j, b) in v.iter().enumerate() {
                let sim = cosine_similarity(a, b);
                assert!(
                    (0.0..=1.0 + 1e-9).contains(&sim),
                    "{} vs {} scored {sim}",
                    vocabulary[i],
                    vocabulary[j]
                );
            }
        }
    }

    #[tokio::test]
    async fn test_empty_text_encodes_to_zero_vector() {
        let encoder = HashingEncoder::new(16);
        let v = encoder.encode(&texts(&[""])).await.unwrap();
        assert!(v[0].iter().all(|x| *x == 0.0));
    }

    #[tokio::test]
    async fn test_empty_batch_is_an_error() {
        let encoder = HashingEncoder::new(16);
        assert!(matches!(
            encoder.encode(&[]).await,
            Err(ScoringError::EmptyInput(_))
        ));
    }

    #[tokio::test]
    async fn test_ollama_encoder_unreachable_server_propagates_error() {
        let encoder = OllamaEncoder::new("http://127.0.0.1:9", "all-minilm").unwrap();
        let err = encoder.encode(&texts(&["python"])).await.unwrap_err();
        assert!(matches!(err, ScoringError::Embedding(_)));
    }
}
