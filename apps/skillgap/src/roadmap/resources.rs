//! Optional resource enrichment: YouTube videos and GitHub repositories.
//!
//! Every lookup degrades to an empty list. Enrichment is off unless
//! `ENABLE_RESOURCE_ENRICHMENT` is set; YouTube also needs an API key.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const LOOKUP_TIMEOUT_SECS: u64 = 10;
const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const GITHUB_SEARCH_URL: &str = "https://api.github.com/search/repositories";

#[derive(Debug, Deserialize)]
struct YoutubeSearch {
    #[serde(default)]
    items: Vec<YoutubeItem>,
}

#[derive(Debug, Deserialize)]
struct YoutubeItem {
    id: YoutubeId,
}

#[derive(Debug, Deserialize)]
struct YoutubeId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GithubSearch {
    #[serde(default)]
    items: Vec<GithubRepo>,
}

#[derive(Debug, Deserialize)]
struct GithubRepo {
    html_url: String,
}

#[derive(Clone)]
pub struct ResourceFetcher {
    /// `None` when enrichment is disabled.
    client: Option<Client>,
    youtube_api_key: Option<String>,
    youtube_url: String,
    github_url: String,
}

impl ResourceFetcher {
    pub fn new(enabled: bool, youtube_api_key: Option<String>) -> Result<Self> {
        let client = if enabled {
            Some(
                Client::builder()
                    .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
                    .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                    .build()
                    .context("failed to build enrichment HTTP client")?,
            )
        } else {
            None
        };
        Ok(Self {
            client,
            youtube_api_key,
            youtube_url: YOUTUBE_SEARCH_URL.to_string(),
            github_url: GITHUB_SEARCH_URL.to_string(),
        })
    }

    pub fn disabled() -> Self {
        Self {
            client: None,
            youtube_api_key: None,
            youtube_url: YOUTUBE_SEARCH_URL.to_string(),
            github_url: GITHUB_SEARCH_URL.to_string(),
        }
    }

    /// Points lookups at other hosts.
    #[cfg(test)]
    pub fn with_endpoints(mut self, youtube_url: &str, github_url: &str) -> Self {
        self.youtube_url = youtube_url.to_string();
        self.github_url = github_url.to_string();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Watch URLs of the top tutorial videos for `query`.
    pub async fn youtube_links(&self, query: &str, max_results: usize) -> Vec<String> {
        let (Some(client), Some(key)) = (&self.client, &self.youtube_api_key) else {
            return Vec::new();
        };

        let max = max_results.to_string();
        let q = format!("{query} tutorial");
        let request = client.get(&self.youtube_url).query(&[
            ("part", "snippet"),
            ("maxResults", max.as_str()),
            ("q", q.as_str()),
            ("key", key.as_str()),
            ("type", "video"),
        ]);

        match fetch_json::<YoutubeSearch>(request).await {
            Ok(search) => search
                .items
                .into_iter()
                .filter_map(|item| item.id.video_id)
                .take(max_results)
                .map(|id| format!("https://www.youtube.com/watch?v={id}"))
                .collect(),
            Err(e) => {
                warn!("YouTube lookup for '{query}' failed: {e:#}");
                Vec::new()
            }
        }
    }

    /// Most-starred repositories matching "<skill> project".
    pub async fn github_projects(&self, skill: &str, max_results: usize) -> Vec<String> {
        let Some(client) = &self.client else {
            return Vec::new();
        };

        let per_page = max_results.to_string();
        let q = format!("{skill} project");
        let request = client.get(&self.github_url).query(&[
            ("q", q.as_str()),
            ("sort", "stars"),
            ("per_page", per_page.as_str()),
        ]);

        match fetch_json::<GithubSearch>(request).await {
            Ok(search) => search
                .items
                .into_iter()
                .take(max_results)
                .map(|repo| repo.html_url)
                .collect(),
            Err(e) => {
                warn!("GitHub lookup for '{skill}' failed: {e:#}");
                Vec::new()
            }
        }
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await.context("request failed")?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("status {status}");
    }
    let body = response.json::<T>().await.context("unexpected response body")?;
    debug!("Enrichment lookup succeeded");
    Ok(body)
}

/// Search URL slug: spaces become `+`.
pub fn search_slug(text: &str) -> String {
    text.replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_fetcher_returns_nothing() {
        let fetcher = ResourceFetcher::disabled();
        assert!(!fetcher.is_enabled());
        assert!(fetcher.youtube_links("Docker", 3).await.is_empty());
        assert!(fetcher.github_projects("Docker", 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_youtube_needs_api_key() {
        let fetcher = ResourceFetcher::new(true, None).unwrap();
        assert!(fetcher.is_enabled());
        assert!(fetcher.youtube_links("Docker", 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_hosts_degrade_to_empty() {
        let fetcher = ResourceFetcher::new(true, Some("key".to_string()))
            .unwrap()
            .with_endpoints("http://127.0.0.1:9/youtube", "http://127.0.0.1:9/github");
        assert!(fetcher.youtube_links("Docker", 3).await.is_empty());
        assert!(fetcher.github_projects("Docker", 3).await.is_empty());
    }

    #[test]
    fn test_search_slug() {
        assert_eq!(search_slug("Machine Learning Basics"), "Machine+Learning+Basics");
    }
}
