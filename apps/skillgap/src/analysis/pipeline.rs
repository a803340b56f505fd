//! Analysis Pipeline: resume + JD in, full skill-gap report out.
//!
//! Steps, in order: extract resume skills, weight JD skills, split matched and
//! missing (exact names), ATS score, hybrid resume-vs-JD match, top catalog
//! recommendations, course roadmaps for the missing skills.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::parsing::jd_weighter::{weight_jd_skills, SkillWeightMap};
use crate::parsing::skill_extractor::extract_skills;
use crate::recommender::{recommend_jobs, recommend_jobs_quick, QuickJobScore, Recommendations};
use crate::roadmap::builder::{build_course_roadmaps, CourseRoadmap};
use crate::scoring::ats::{compute_ats_score, AtsScore, SkillMatchMode};
use crate::scoring::hybrid::MatchResult;
use crate::state::AppState;

const PIPELINE_TOP_N: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct SkillAnalysis {
    pub total_required: usize,
    pub matched: usize,
    pub matched_skills: Vec<String>,
    pub missing: usize,
    pub missing_skills: Vec<String>,
    /// "matched/required".
    pub match_count: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub pipeline_status: &'static str,
    pub resume_skills: Vec<String>,
    pub jd_skills: SkillWeightMap,
    pub skill_analysis: SkillAnalysis,
    pub ats_score: AtsScore,
    /// Absent when the JD names no vocabulary skills.
    pub jd_match: Option<MatchResult>,
    pub hybrid_job_recommendations: Recommendations,
    pub roadmap: BTreeMap<String, CourseRoadmap>,
}

/// Skills plus, when a JD was given, the hybrid match against it.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedResume {
    pub status: &'static str,
    pub resume_skills: Vec<String>,
    pub jd_skills: Option<Vec<String>>,
    pub match_result: Option<MatchResult>,
    pub recommended_jobs: Vec<QuickJobScore>,
}

/// Extracts skills from resume text, then runs the full pipeline.
pub async fn analyze_texts(
    state: &AppState,
    resume_text: &str,
    jd_text: &str,
) -> Result<AnalysisReport, AppError> {
    let resume_skills: Vec<String> = extract_skills(resume_text, state.vocabulary.skills())
        .into_iter()
        .collect();
    analyze_skills(state, resume_skills, jd_text).await
}

pub async fn analyze_skills(
    state: &AppState,
    resume_skills: Vec<String>,
    jd_text: &str,
) -> Result<AnalysisReport, AppError> {
    let jd_weights = weight_jd_skills(jd_text, state.vocabulary.skills());
    let jd_skills: Vec<String> = jd_weights.keys().cloned().collect();

    let ats = compute_ats_score(&jd_weights, resume_skills.as_slice(), SkillMatchMode::Exact);

    let skill_analysis = SkillAnalysis {
        total_required: jd_skills.len(),
        matched: ats.matched_skills.len(),
        matched_skills: ats.matched_skills.clone(),
        missing: ats.missing_skills.len(),
        missing_skills: ats.missing_skills.clone(),
        match_count: format!("{}/{}", ats.matched_skills.len(), jd_skills.len()),
    };

    let jd_match = if jd_skills.is_empty() {
        None
    } else {
        Some(state.scorer.match_resume_to_jd(&resume_skills, &jd_skills).await?)
    };

    let recommendations =
        recommend_jobs(&state.scorer, &resume_skills, &state.catalog, PIPELINE_TOP_N).await?;

    let roadmap = build_course_roadmaps(
        &skill_analysis.missing_skills,
        state.subtopics.as_ref(),
        &state.resources,
    )
    .await;

    info!(
        "Pipeline complete: {} resume skills, match {}, ATS {}%",
        resume_skills.len(),
        skill_analysis.match_count,
        ats.score
    );

    Ok(AnalysisReport {
        pipeline_status: "success",
        resume_skills,
        jd_skills: jd_weights,
        skill_analysis,
        ats_score: ats,
        jd_match,
        hybrid_job_recommendations: recommendations,
        roadmap,
    })
}

/// Upload flow: skills from the resume, an optional JD match, and a quick
/// top-5 list from the catalog.
pub async fn process_resume(
    state: &AppState,
    resume_skills: Vec<String>,
    jd_text: Option<&str>,
) -> Result<ProcessedResume, AppError> {
    let (jd_skills, match_result) = match jd_text {
        Some(text) => {
            let jd_skills: Vec<String> = weight_jd_skills(text, state.vocabulary.skills())
                .into_keys()
                .collect();
            let result = state.scorer.match_resume_to_jd(&resume_skills, &jd_skills).await?;
            (Some(jd_skills), Some(result))
        }
        None => (None, None),
    };

    let recommended_jobs =
        recommend_jobs_quick(&state.scorer, &resume_skills, &state.catalog, PIPELINE_TOP_N)
            .await?;

    Ok(ProcessedResume {
        status: "success",
        resume_skills,
        jd_skills,
        match_result,
        recommended_jobs,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::scoring::ats::AtsBand;
    use crate::scoring::hybrid::test_support::FailingEncoder;
    use crate::state::test_support::{test_state, test_state_with_encoder};

    const RESUME: &str = "Data analyst with Python, SQL and Excel. Some Git.";
    const JD: &str = "Must have: Python, SQL. Good to have: Docker. Optional: AWS";

    #[tokio::test]
    async fn test_analyze_texts_report() {
        let report = analyze_texts(&test_state(), RESUME, JD).await.unwrap();

        assert_eq!(report.pipeline_status, "success");
        assert_eq!(report.resume_skills, vec!["Excel", "Git", "Python", "SQL"]);
        assert_eq!(report.jd_skills.get("Python"), Some(&3));
        assert_eq!(report.jd_skills.get("Docker"), Some(&2));
        assert_eq!(report.jd_skills.get("AWS"), Some(&1));

        let analysis = &report.skill_analysis;
        assert_eq!(analysis.match_count, "2/4");
        assert_eq!(analysis.matched_skills, vec!["Python", "SQL"]);
        assert_eq!(analysis.missing_skills, vec!["AWS", "Docker"]);

        // 6 of 9 weight points.
        assert_eq!(report.ats_score.score, 66.67);
        assert_eq!(report.ats_score.band, AtsBand::Fair);

        let jd_match = report.jd_match.as_ref().unwrap();
        assert_eq!(jd_match.match_percentage, 50.0);

        assert_eq!(report.hybrid_job_recommendations.matches.len(), 3);
        assert_eq!(report.roadmap.len(), 2);
        assert!(report.roadmap.contains_key("Docker"));
    }

    #[tokio::test]
    async fn test_jd_without_known_skills() {
        let report = analyze_texts(&test_state(), RESUME, "We value curiosity.")
            .await
            .unwrap();
        assert_eq!(report.skill_analysis.match_count, "0/0");
        assert_eq!(report.ats_score.score, 0.0);
        assert!(report.jd_match.is_none());
        assert!(report.roadmap.is_empty());
    }

    #[tokio::test]
    async fn test_encoder_failure_fails_pipeline() {
        let state = test_state_with_encoder(Arc::new(FailingEncoder));
        let err = analyze_texts(&state, RESUME, JD).await.unwrap_err();
        assert!(matches!(err, AppError::Scoring(_)));
    }

    #[tokio::test]
    async fn test_process_resume_with_and_without_jd() {
        let state = test_state();
        let skills = vec!["Python".to_string(), "SQL".to_string()];

        let with_jd = process_resume(&state, skills.clone(), Some(JD)).await.unwrap();
        assert_eq!(
            with_jd.jd_skills.as_deref(),
            Some(&["AWS".to_string(), "Docker".to_string(), "Python".to_string(), "SQL".to_string()][..])
        );
        assert!(with_jd.match_result.is_some());
        assert_eq!(with_jd.recommended_jobs.len(), 3);

        let without = process_resume(&state, skills, None).await.unwrap();
        assert!(without.jd_skills.is_none());
        assert!(without.match_result.is_none());
    }
}
