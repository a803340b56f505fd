//! Job recommendation: hybrid-scores a resume's skills against every posting
//! in the catalog and ranks them.

pub mod catalog;
pub mod handlers;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::recommender::catalog::{JobCatalog, JobPosting};
use crate::scoring::hybrid::{to_percentage, HybridScore, HybridScorer};
use crate::scoring::tfidf::TfidfConfig;
use crate::scoring::{round_to, ScoringError};

pub const DEFAULT_TOP_N: usize = 5;
pub const MATCHING_METHOD: &str = "Hybrid (70% Semantic + 30% TF-IDF)";

/// One scored posting. Percentages are 0–100 with two decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobMatch {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub semantic_score: f64,
    pub tfidf_score: f64,
    pub hybrid_score: f64,
    pub match_percentage: f64,
    pub semantic_percentage: f64,
    pub tfidf_percentage: f64,
    pub rank: usize,
}

impl JobMatch {
    fn new(posting: &JobPosting, score: HybridScore) -> Self {
        Self {
            id: posting.id.clone(),
            title: posting.title.clone(),
            company: posting.company.clone(),
            description: posting.description.clone(),
            semantic_score: round_to(score.semantic, 4),
            tfidf_score: round_to(score.tfidf, 4),
            hybrid_score: score.hybrid,
            match_percentage: to_percentage(score.hybrid),
            semantic_percentage: to_percentage(score.semantic),
            tfidf_percentage: to_percentage(score.tfidf),
            rank: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub total_jobs: usize,
    pub resume_skills: Vec<String>,
    pub matching_method: String,
    pub matches: Vec<JobMatch>,
}

/// Lightweight result for the quick recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickJobScore {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedBreakdown {
    pub rank: usize,
    #[serde(flatten)]
    pub job: JobBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobBreakdown {
    pub job_id: String,
    pub title: String,
    pub semantic_score: f64,
    pub tfidf_score: f64,
    pub hybrid_score: f64,
    pub semantic_percentage: f64,
    pub tfidf_percentage: f64,
    pub hybrid_percentage: f64,
}

/// How each scoring method alone would rank the catalog, next to the hybrid ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodComparison {
    pub semantic_ranking: Vec<RankedBreakdown>,
    pub tfidf_ranking: Vec<RankedBreakdown>,
    pub hybrid_ranking: Vec<RankedBreakdown>,
    pub detailed_breakdown: Vec<JobBreakdown>,
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

async fn catalog_scores(
    scorer: &HybridScorer,
    resume_skills: &[String],
    catalog: &JobCatalog,
    tfidf_config: TfidfConfig,
) -> Result<Vec<HybridScore>, ScoringError> {
    let resume_text = resume_skills.join(" ");
    scorer
        .score_texts(&resume_text, &catalog.descriptions(), tfidf_config)
        .await
}

/// Scores every posting, sorts by hybrid score (ties keep catalog order) and
/// assigns 1-based ranks.
pub async fn rank_catalog(
    scorer: &HybridScorer,
    resume_skills: &[String],
    catalog: &JobCatalog,
) -> Result<Vec<JobMatch>, ScoringError> {
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let scores = catalog_scores(scorer, resume_skills, catalog, TfidfConfig::catalog()).await?;

    let mut matches: Vec<JobMatch> = catalog
        .postings()
        .iter()
        .zip(scores)
        .map(|(posting, score)| JobMatch::new(posting, score))
        .collect();

    matches.sort_by(|a, b| descending(a.hybrid_score, b.hybrid_score));
    for (idx, m) in matches.iter_mut().enumerate() {
        m.rank = idx + 1;
    }
    Ok(matches)
}

/// Top-N hybrid recommendations for a resume.
pub async fn recommend_jobs(
    scorer: &HybridScorer,
    resume_skills: &[String],
    catalog: &JobCatalog,
    top_n: usize,
) -> Result<Recommendations, ScoringError> {
    let mut matches = rank_catalog(scorer, resume_skills, catalog).await?;
    matches.truncate(top_n);

    info!(
        "Recommended {} of {} jobs for {} resume skills",
        matches.len(),
        catalog.len(),
        resume_skills.len()
    );

    Ok(Recommendations {
        total_jobs: catalog.len(),
        resume_skills: resume_skills.to_vec(),
        matching_method: MATCHING_METHOD.to_string(),
        matches,
    })
}

/// Top-N postings by hybrid score, using the plain vectorizer (no stop words,
/// no feature cap). Scores are rounded to four decimals.
pub async fn recommend_jobs_quick(
    scorer: &HybridScorer,
    resume_skills: &[String],
    catalog: &JobCatalog,
    top_n: usize,
) -> Result<Vec<QuickJobScore>, ScoringError> {
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let scores = catalog_scores(scorer, resume_skills, catalog, TfidfConfig::default()).await?;

    let mut results: Vec<QuickJobScore> = catalog
        .postings()
        .iter()
        .zip(scores)
        .map(|(posting, score)| QuickJobScore {
            id: posting.id.clone(),
            title: posting.title.clone(),
            description: posting.description.clone(),
            score: score.hybrid,
        })
        .collect();

    results.sort_by(|a, b| descending(a.score, b.score));
    results.truncate(top_n);
    Ok(results)
}

/// Per-posting breakdown plus semantic-only, TF-IDF-only and hybrid rankings.
pub async fn compare_methods(
    scorer: &HybridScorer,
    resume_skills: &[String],
    catalog: &JobCatalog,
) -> Result<MethodComparison, ScoringError> {
    if catalog.is_empty() {
        return Ok(MethodComparison {
            semantic_ranking: Vec::new(),
            tfidf_ranking: Vec::new(),
            hybrid_ranking: Vec::new(),
            detailed_breakdown: Vec::new(),
        });
    }

    let scores = catalog_scores(scorer, resume_skills, catalog, TfidfConfig::catalog()).await?;

    let details: Vec<JobBreakdown> = catalog
        .postings()
        .iter()
        .zip(scores)
        .map(|(posting, score)| JobBreakdown {
            job_id: posting.id.clone(),
            title: posting.title.clone(),
            semantic_score: round_to(score.semantic, 4),
            tfidf_score: round_to(score.tfidf, 4),
            hybrid_score: score.hybrid,
            semantic_percentage: to_percentage(score.semantic),
            tfidf_percentage: to_percentage(score.tfidf),
            hybrid_percentage: to_percentage(score.hybrid),
        })
        .collect();

    let ranked_by = |key: fn(&JobBreakdown) -> f64| -> Vec<RankedBreakdown> {
        let mut sorted = details.clone();
        sorted.sort_by(|a, b| descending(key(a), key(b)));
        sorted
            .into_iter()
            .enumerate()
            .map(|(idx, job)| RankedBreakdown { rank: idx + 1, job })
            .collect()
    };

    Ok(MethodComparison {
        semantic_ranking: ranked_by(|j| j.semantic_score),
        tfidf_ranking: ranked_by(|j| j.tfidf_score),
        hybrid_ranking: ranked_by(|j| j.hybrid_score),
        detailed_breakdown: details,
    })
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_support::sample_catalog;
    use super::*;
    use crate::scoring::embedding::HashingEncoder;
    use crate::scoring::hybrid::test_support::FailingEncoder;

    fn scorer() -> HybridScorer {
        HybridScorer::new(Arc::new(HashingEncoder::new(384)))
    }

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_rank_catalog_sorted_and_ranked() {
        let matches = rank_catalog(
            &scorer(),
            &skills(&["Python", "SQL", "Excel", "Data Analysis"]),
            &sample_catalog(),
        )
        .await
        .unwrap();

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].id, "data");
        for (idx, m) in matches.iter().enumerate() {
            assert_eq!(m.rank, idx + 1);
        }
        assert!(matches
            .windows(2)
            .all(|w| w[0].hybrid_score >= w[1].hybrid_score));
    }

    #[tokio::test]
    async fn test_recommend_jobs_truncates_to_top_n() {
        let recs = recommend_jobs(
            &scorer(),
            &skills(&["Docker", "Kubernetes"]),
            &sample_catalog(),
            2,
        )
        .await
        .unwrap();

        assert_eq!(recs.total_jobs, 3);
        assert_eq!(recs.matches.len(), 2);
        assert_eq!(recs.matches[0].id, "ops");
        assert_eq!(recs.matching_method, MATCHING_METHOD);
        let top = &recs.matches[0];
        assert_eq!(top.match_percentage, to_percentage(top.hybrid_score));
    }

    #[tokio::test]
    async fn test_quick_recommendations_respect_top_n() {
        let quick = recommend_jobs_quick(
            &scorer(),
            &skills(&["React", "JavaScript"]),
            &sample_catalog(),
            3,
        )
        .await
        .unwrap();
        assert_eq!(quick.len(), 3);
        assert_eq!(quick[0].id, "web");
    }

    #[tokio::test]
    async fn test_compare_methods_has_three_rankings() {
        let comparison = compare_methods(&scorer(), &skills(&["Python", "SQL"]), &sample_catalog())
            .await
            .unwrap();
        assert_eq!(comparison.detailed_breakdown.len(), 3);
        for ranking in [
            &comparison.semantic_ranking,
            &comparison.tfidf_ranking,
            &comparison.hybrid_ranking,
        ] {
            let ranks: Vec<usize> = ranking.iter().map(|r| r.rank).collect();
            assert_eq!(ranks, vec![1, 2, 3]);
        }
        assert!(comparison
            .tfidf_ranking
            .windows(2)
            .all(|w| w[0].job.tfidf_score >= w[1].job.tfidf_score));
    }

    #[tokio::test]
    async fn test_empty_catalog_returns_no_matches() {
        let recs = recommend_jobs(&scorer(), &skills(&["Python"]), &JobCatalog::default(), 5)
            .await
            .unwrap();
        assert_eq!(recs.total_jobs, 0);
        assert!(recs.matches.is_empty());
    }

    #[tokio::test]
    async fn test_encoder_failure_is_not_swallowed() {
        let scorer = HybridScorer::new(Arc::new(FailingEncoder));
        let result = recommend_jobs(&scorer, &skills(&["Python"]), &sample_catalog(), 5).await;
        assert!(matches!(result, Err(ScoringError::Embedding(_))));
    }
}
