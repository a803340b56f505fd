//! Subtopic providers: where a skill's learning stages come from.
//!
//! `AppState` holds an `Arc<dyn SubtopicProvider>` selected by `SUBTOPIC_BACKEND`.
//! Roadmap building never fails because of a provider: errors and empty
//! answers fall back to five fixed stages.

use async_trait::async_trait;
use tracing::warn;

use crate::llm_client::prompts::{subtopics_prompt, JSON_ONLY_SYSTEM};
use crate::llm_client::{extract_json, LlmClient, LlmError};

const MAX_LINE_SUBTOPICS: usize = 8;

#[async_trait]
pub trait SubtopicProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn subtopics(&self, skill: &str) -> Result<Vec<String>, LlmError>;
}

/// Five generic stages used whenever no better list is available.
pub fn fallback_subtopics(skill: &str) -> Vec<String> {
    vec![
        format!("{skill} Fundamentals & Basics"),
        format!("{skill} Core Concepts & Architecture"),
        format!("{skill} Practical Implementation"),
        format!("{skill} Advanced Patterns & Optimization"),
        format!("{skill} Real-world Projects"),
    ]
}

/// Asks the provider, falling back to the fixed stages on error or an empty list.
pub async fn subtopics_or_fallback(provider: &dyn SubtopicProvider, skill: &str) -> Vec<String> {
    match provider.subtopics(skill).await {
        Ok(topics) if !topics.is_empty() => topics,
        Ok(_) => {
            warn!("{} returned no subtopics for {skill}, using fallback", provider.name());
            fallback_subtopics(skill)
        }
        Err(e) => {
            warn!("Subtopic generation failed for {skill}, using fallback: {e}");
            fallback_subtopics(skill)
        }
    }
}

pub struct StaticSubtopics;

#[async_trait]
impl SubtopicProvider for StaticSubtopics {
    fn name(&self) -> &str {
        "static"
    }

    async fn subtopics(&self, skill: &str) -> Result<Vec<String>, LlmError> {
        Ok(fallback_subtopics(skill))
    }
}

/// Subtopics generated by the local LLM.
pub struct LlmSubtopics {
    llm: LlmClient,
}

impl LlmSubtopics {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SubtopicProvider for LlmSubtopics {
    fn name(&self) -> &str {
        self.llm.model()
    }

    async fn subtopics(&self, skill: &str) -> Result<Vec<String>, LlmError> {
        let reply = self
            .llm
            .generate(&subtopics_prompt(skill), JSON_ONLY_SYSTEM)
            .await?;
        Ok(parse_subtopic_reply(&reply))
    }
}

/// Reads a JSON array of strings; otherwise treats each non-blank line as a
/// bullet and keeps the first eight.
pub(crate) fn parse_subtopic_reply(reply: &str) -> Vec<String> {
    let candidate = extract_json(reply);
    if let Ok(topics) = serde_json::from_str::<Vec<String>>(candidate) {
        return topics
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
    }

    candidate
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            l.trim_matches(|c: char| matches!(c, '-' | '•' | ' ' | '\n' | '\r'))
                .to_string()
        })
        .filter(|l| !l.is_empty())
        .take(MAX_LINE_SUBTOPICS)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::FailingSubtopics;
    use super::*;

    #[test]
    fn test_fallback_has_five_stages() {
        let topics = fallback_subtopics("Docker");
        assert_eq!(topics.len(), 5);
        assert_eq!(topics[0], "Docker Fundamentals & Basics");
        assert_eq!(topics[4], "Docker Real-world Projects");
    }

    #[test]
    fn test_parse_json_array_reply() {
        let topics = parse_subtopic_reply("Here you go:\n[\"Images\", \" Volumes \", \"\"]");
        assert_eq!(topics, vec!["Images", "Volumes"]);
    }

    #[test]
    fn test_parse_bulleted_reply_keeps_eight() {
        let reply = (1..=10)
            .map(|i| format!("- Topic {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let topics = parse_subtopic_reply(&reply);
        assert_eq!(topics.len(), 8);
        assert_eq!(topics[0], "Topic 1");
        assert_eq!(topics[7], "Topic 8");
    }

    #[test]
    fn test_parse_bullet_glyphs_stripped() {
        let topics = parse_subtopic_reply("• Networking\n\n• Compose");
        assert_eq!(topics, vec!["Networking", "Compose"]);
    }

    #[tokio::test]
    async fn test_static_provider_returns_fallback() {
        let topics = StaticSubtopics.subtopics("SQL").await.unwrap();
        assert_eq!(topics, fallback_subtopics("SQL"));
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let topics = subtopics_or_fallback(&FailingSubtopics, "AWS").await;
        assert_eq!(topics, fallback_subtopics("AWS"));
    }

    #[tokio::test]
    async fn test_unreachable_llm_falls_back() {
        let llm = LlmClient::new("http://127.0.0.1:9", "llama3").unwrap();
        let provider = LlmSubtopics::new(llm);
        assert_eq!(provider.name(), "llama3");
        let topics = subtopics_or_fallback(&provider, "Rust").await;
        assert_eq!(topics, fallback_subtopics("Rust"));
    }
}
