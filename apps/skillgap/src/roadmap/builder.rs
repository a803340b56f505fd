//! Roadmap Builder: turns missing skills into dated, per-subtopic study plans.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::parsing::jd_weighter::SkillWeightMap;
use crate::roadmap::distributor::{distribute_skills, ScheduledSkill, LEARNING_HOURS_PER_DAY};
use crate::roadmap::ranking::rank_skills;
use crate::roadmap::resources::{search_slug, ResourceFetcher};
use crate::roadmap::subtopics::{fallback_subtopics, subtopics_or_fallback, SubtopicProvider};
use crate::scoring::ats::SkillMatchMode;
use crate::scoring::round_to;

pub const DEFAULT_DAYS: u32 = 30;
const HOURS_PER_MISSING_SKILL: usize = 40;
const COURSE_DURATION_WEEKS: u32 = 8;
const MAX_ENRICHED_LINKS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Deadline
// ────────────────────────────────────────────────────────────────────────────

/// A deadline as days remaining or an ISO-8601 date/datetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deadline {
    Days(i64),
    Date(String),
}

fn parse_deadline_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Days available until `deadline`, at least 1. Unparsable input gives
/// `DEFAULT_DAYS`.
pub fn days_until_deadline(deadline: &Deadline, now: NaiveDateTime) -> u32 {
    match deadline {
        Deadline::Days(days) => (*days).clamp(1, u32::MAX as i64) as u32,
        Deadline::Date(raw) => {
            if let Ok(days) = raw.trim().parse::<i64>() {
                return days.clamp(1, u32::MAX as i64) as u32;
            }
            match parse_deadline_date(raw) {
                Some(target) => (target - now).num_days().clamp(1, u32::MAX as i64) as u32,
                None => {
                    warn!("Could not parse deadline '{raw}', using default {DEFAULT_DAYS} days");
                    DEFAULT_DAYS
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-skill study plan
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLinks {
    pub youtube: Vec<String>,
    pub docs: Vec<String>,
    pub github: Vec<String>,
    pub practice: Vec<String>,
}

impl SearchLinks {
    fn for_topic(skill: &str, topic: &str) -> Self {
        let terms = format!("{}+{}", search_slug(skill), search_slug(topic));
        Self {
            youtube: vec![format!(
                "https://www.youtube.com/results?search_query={terms}+tutorial"
            )],
            docs: vec![format!("https://www.google.com/search?q={terms}+documentation")],
            github: vec![format!("https://github.com/search?q={terms}+project")],
            practice: vec![format!(
                "https://www.youtube.com/results?search_query={terms}+practice"
            )],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtopicPlan {
    pub title: String,
    pub estimated_days: u32,
    /// Two subtopics per week, starting at week 1.
    pub week: usize,
    pub resources: SearchLinks,
    pub practice_projects: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRoadmap {
    pub skill: String,
    pub estimated_days: u32,
    pub parallel_stream: usize,
    pub complexity: u8,
    pub subtopics: Vec<SubtopicPlan>,
}

/// Lays out `subtopics` over the skill's scheduled days.
pub fn build_skill_roadmap(scheduled: &ScheduledSkill, subtopics: Vec<String>) -> SkillRoadmap {
    let subtopics = if subtopics.is_empty() {
        fallback_subtopics(&scheduled.skill)
    } else {
        subtopics
    };
    let days_per_subtopic = (scheduled.estimated_days / subtopics.len() as u32).max(1);

    let plans = subtopics
        .into_iter()
        .enumerate()
        .map(|(idx, topic)| SubtopicPlan {
            estimated_days: days_per_subtopic,
            week: idx / 2 + 1,
            resources: SearchLinks::for_topic(&scheduled.skill, &topic),
            practice_projects: vec![
                format!("Build a mini-project demonstrating {topic}"),
                format!("Solve 5-10 practice problems on {topic}"),
                format!("Create a portfolio piece showcasing {topic}"),
            ],
            milestones: vec![
                format!("Understand core concepts of {topic}"),
                "Complete practice exercises".to_string(),
                format!("Build project using {topic}"),
            ],
            title: topic,
        })
        .collect();

    SkillRoadmap {
        skill: scheduled.skill.clone(),
        estimated_days: scheduled.estimated_days,
        parallel_stream: scheduled.parallel_stream,
        complexity: scheduled.complexity,
        subtopics: plans,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personalized job roadmap
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonalizedRoadmapRequest {
    #[serde(default)]
    pub resume_skills: Vec<String>,
    #[serde(default)]
    pub jd_skills: Vec<String>,
    #[serde(default)]
    pub jd_skill_weights: Option<SkillWeightMap>,
    pub deadline: Option<Deadline>,
    pub job_title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub resume_skills_count: usize,
    pub jd_skills_count: usize,
    pub matched_skills: Vec<String>,
    pub matched_count: usize,
    pub missing_skills: Vec<String>,
    pub missing_count: usize,
    pub match_percentage: f64,
    pub days_available: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub start_date: NaiveDateTime,
    pub target_completion: NaiveDateTime,
    pub total_days: u32,
    pub learning_hours_per_day: u32,
    pub total_learning_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningStrategy {
    pub approach: String,
    pub parallel_streams: usize,
    pub sequential_order: bool,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTemplate {
    pub weeks: u32,
    pub days_per_week: f64,
    pub sample_week_structure: BTreeMap<String, String>,
    pub daily_routine: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessMetrics {
    pub minimum_competency: String,
    pub target_competency: String,
    pub success_criteria: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobContext {
    pub title: String,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedRoadmap {
    pub analysis: GapAnalysis,
    pub timeline: Timeline,
    pub learning_strategy: LearningStrategy,
    pub skill_roadmaps: Vec<SkillRoadmap>,
    pub weekly_schedule_template: WeeklyTemplate,
    pub success_metrics: SuccessMetrics,
    pub job_context: JobContext,
}

fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round_to(matched as f64 / total as f64 * 100.0, 2)
    }
}

pub fn weekly_template(total_days: u32) -> WeeklyTemplate {
    let weeks = (total_days / 7).max(1);
    let days_per_week = round_to(total_days as f64 / weeks as f64, 1);

    let sample_week_structure = [
        ("monday", "Learn theory for Stream 1 skill"),
        ("tuesday", "Practice exercises for Stream 1 skill"),
        ("wednesday", "Learn theory for Stream 2 skill"),
        ("thursday", "Practice exercises for Stream 2 skill"),
        ("friday", "Build mini-project for any skill"),
        ("saturday", "Review + mock interview prep"),
        ("sunday", "Rest or catch up on pending topics"),
    ];
    let daily_routine = [
        ("morning_2hours", "Theory & concepts learning"),
        ("afternoon_1.5hours", "Practice exercises & coding"),
        ("evening_0.5hours", "Documentation review & planning"),
        ("notes", "Adjust timing based on personal preferences"),
    ];

    let to_map = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>()
    };

    WeeklyTemplate {
        weeks,
        days_per_week,
        sample_week_structure: to_map(&sample_week_structure),
        daily_routine: to_map(&daily_routine),
    }
}

fn success_metrics() -> SuccessMetrics {
    SuccessMetrics {
        minimum_competency: "Basic understanding + 1 small project per skill".to_string(),
        target_competency: "Intermediate + portfolio-ready project per skill".to_string(),
        success_criteria: vec![
            "Complete 80% of subtopics for all skills".to_string(),
            "Build 1 project per skill demonstrating competency".to_string(),
            "Pass mock interviews covering missing skills".to_string(),
            "Achieve 70%+ match with job requirements".to_string(),
        ],
    }
}

/// Builds the full roadmap for one job: gap analysis, ranked and scheduled
/// missing skills, per-skill plans and a weekly template.
///
/// Skills are compared case-insensitively; both lists keep JD spelling and order.
pub async fn build_personalized_roadmap(
    req: &PersonalizedRoadmapRequest,
    provider: &dyn SubtopicProvider,
    now: NaiveDateTime,
) -> PersonalizedRoadmap {
    let days_available = req
        .deadline
        .as_ref()
        .map_or(DEFAULT_DAYS, |d| days_until_deadline(d, now));

    let (matched, missing) = SkillMatchMode::CaseInsensitive
        .partition(req.jd_skills.iter(), req.resume_skills.as_slice());

    let ranked = rank_skills(&missing, req.jd_skill_weights.as_ref());
    let schedule = distribute_skills(&ranked, days_available);

    let mut skill_roadmaps = Vec::with_capacity(schedule.len());
    for scheduled in &schedule {
        let topics = subtopics_or_fallback(provider, &scheduled.skill).await;
        skill_roadmaps.push(build_skill_roadmap(scheduled, topics));
    }

    let total_learning_hours: u32 = skill_roadmaps
        .iter()
        .map(|r| r.estimated_days * LEARNING_HOURS_PER_DAY)
        .sum();

    let mut streams: Vec<usize> = skill_roadmaps.iter().map(|r| r.parallel_stream).collect();
    streams.sort_unstable();
    streams.dedup();
    let parallel_streams = streams.len();

    info!(
        "Built roadmap: {} missing skills over {} days in {} streams",
        missing.len(),
        days_available,
        parallel_streams
    );

    PersonalizedRoadmap {
        analysis: GapAnalysis {
            resume_skills_count: req.resume_skills.len(),
            jd_skills_count: req.jd_skills.len(),
            matched_count: matched.len(),
            missing_count: missing.len(),
            match_percentage: match_percentage(matched.len(), req.jd_skills.len()),
            matched_skills: matched,
            missing_skills: missing,
            days_available,
        },
        timeline: Timeline {
            start_date: now,
            target_completion: now + Duration::days(days_available as i64),
            total_days: days_available,
            learning_hours_per_day: LEARNING_HOURS_PER_DAY,
            total_learning_hours,
        },
        learning_strategy: LearningStrategy {
            approach: format!("Parallel learning with {parallel_streams} focus streams"),
            parallel_streams,
            sequential_order: false,
            rationale: "Learn high-priority skills in parallel to maximize prep time while \
                        maintaining focus"
                .to_string(),
        },
        skill_roadmaps,
        weekly_schedule_template: weekly_template(days_available),
        success_metrics: success_metrics(),
        job_context: JobContext {
            title: req
                .job_title
                .clone()
                .unwrap_or_else(|| "Unknown Job".to_string()),
            company: req
                .company
                .clone()
                .unwrap_or_else(|| "Unknown Company".to_string()),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewSummary {
    pub matched_count: usize,
    pub missing_count: usize,
    pub match_percentage: f64,
    pub days_available: u32,
    pub parallel_streams: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPreview {
    pub summary: PreviewSummary,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub estimated_learning_hours: usize,
}

/// Quick gap summary without generating subtopics.
pub fn preview_roadmap(resume_skills: &[String], jd_skills: &[String], days: u32) -> RoadmapPreview {
    let (matched, missing) =
        SkillMatchMode::CaseInsensitive.partition(jd_skills.iter(), resume_skills);

    RoadmapPreview {
        summary: PreviewSummary {
            matched_count: matched.len(),
            missing_count: missing.len(),
            match_percentage: match_percentage(matched.len(), jd_skills.len()),
            days_available: days,
            parallel_streams: (missing.len() / 2).clamp(1, 3),
        },
        estimated_learning_hours: missing.len() * HOURS_PER_MISSING_SKILL,
        matched_skills: matched,
        missing_skills: missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Course roadmap (per skill, with enrichment)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSubtopic {
    pub title: String,
    pub youtube_links: Vec<String>,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalProjects {
    pub suggested: Vec<String>,
    pub github_references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRoadmap {
    pub main_course: String,
    pub duration_weeks: u32,
    pub subtopics: Vec<CourseSubtopic>,
    pub final_projects: FinalProjects,
}

/// An eight-week course for one skill. Lookups run one after another and
/// contribute empty lists when enrichment is off or fails.
pub async fn build_course_roadmap(
    skill: &str,
    provider: &dyn SubtopicProvider,
    resources: &ResourceFetcher,
) -> CourseRoadmap {
    let topics = subtopics_or_fallback(provider, skill).await;

    let mut subtopics = Vec::with_capacity(topics.len());
    for topic in topics {
        let youtube_links = resources.youtube_links(&topic, MAX_ENRICHED_LINKS).await;
        subtopics.push(CourseSubtopic {
            project: format!("Mini project based on {topic}"),
            youtube_links,
            title: topic,
        });
    }

    CourseRoadmap {
        main_course: skill.to_string(),
        duration_weeks: COURSE_DURATION_WEEKS,
        subtopics,
        final_projects: FinalProjects {
            suggested: vec![
                format!("Build a complete mini-project using {skill}"),
                format!("Create a portfolio-level project in {skill}"),
            ],
            github_references: resources.github_projects(skill, MAX_ENRICHED_LINKS).await,
        },
    }
}

/// Course roadmaps keyed by skill name.
pub async fn build_course_roadmaps(
    skills: &[String],
    provider: &dyn SubtopicProvider,
    resources: &ResourceFetcher,
) -> BTreeMap<String, CourseRoadmap> {
    let mut roadmaps = BTreeMap::new();
    for skill in skills {
        if roadmaps.contains_key(skill) {
            continue;
        }
        let course = build_course_roadmap(skill, provider, resources).await;
        roadmaps.insert(skill.clone(), course);
    }
    roadmaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::subtopics::test_support::FailingSubtopics;
    use crate::roadmap::subtopics::StaticSubtopics;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap()
    }

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scheduled(skill: &str, estimated_days: u32) -> ScheduledSkill {
        ScheduledSkill {
            skill: skill.to_string(),
            weight: 3,
            complexity: 4,
            parallel_stream: 2,
            stream_position: 1,
            total_stream_days: 15,
            estimated_days,
            order: 0,
        }
    }

    #[test]
    fn test_deadline_days_and_dates() {
        assert_eq!(days_until_deadline(&Deadline::Days(45), now()), 45);
        assert_eq!(days_until_deadline(&Deadline::Date("2026-03-15".into()), now()), 13);
        assert_eq!(
            days_until_deadline(&Deadline::Date("2026-03-15T10:00:00".into()), now()),
            14
        );
        assert_eq!(days_until_deadline(&Deadline::Date("2025-01-01".into()), now()), 1);
        assert_eq!(days_until_deadline(&Deadline::Date("21".into()), now()), 21);
    }

    #[test]
    fn test_unparsable_deadline_uses_default() {
        assert_eq!(
            days_until_deadline(&Deadline::Date("next month".into()), now()),
            DEFAULT_DAYS
        );
    }

    #[test]
    fn test_deadline_deserializes_number_or_string() {
        let days: Deadline = serde_json::from_str("45").unwrap();
        assert_eq!(days, Deadline::Days(45));
        let date: Deadline = serde_json::from_str("\"2026-03-15\"").unwrap();
        assert_eq!(date, Deadline::Date("2026-03-15".into()));
    }

    #[test]
    fn test_skill_roadmap_layout() {
        let roadmap = build_skill_roadmap(
            &scheduled("Machine Learning", 10),
            fallback_subtopics("Machine Learning"),
        );
        assert_eq!(roadmap.subtopics.len(), 5);
        assert_eq!(roadmap.parallel_stream, 2);
        let weeks: Vec<usize> = roadmap.subtopics.iter().map(|s| s.week).collect();
        assert_eq!(weeks, vec![1, 1, 2, 2, 3]);
        assert!(roadmap.subtopics.iter().all(|s| s.estimated_days == 2));

        let first = &roadmap.subtopics[0];
        assert_eq!(
            first.resources.youtube[0],
            "https://www.youtube.com/results?search_query=Machine+Learning+Machine+Learning+Fundamentals+&+Basics+tutorial"
        );
        assert!(first.resources.github[0].starts_with("https://github.com/search?q=Machine+Learning+"));
        assert_eq!(first.practice_projects.len(), 3);
        assert_eq!(first.milestones[1], "Complete practice exercises");
    }

    #[test]
    fn test_days_per_subtopic_never_zero() {
        let roadmap = build_skill_roadmap(&scheduled("Git", 2), skills(&["a", "b", "c"]));
        assert!(roadmap.subtopics.iter().all(|s| s.estimated_days == 1));
    }

    #[test]
    fn test_empty_subtopics_fall_back() {
        let roadmap = build_skill_roadmap(&scheduled("Git", 5), Vec::new());
        assert_eq!(roadmap.subtopics.len(), 5);
    }

    #[test]
    fn test_weekly_template() {
        let t = weekly_template(30);
        assert_eq!(t.weeks, 4);
        assert_eq!(t.days_per_week, 7.5);
        assert_eq!(t.sample_week_structure.len(), 7);
        let short = weekly_template(3);
        assert_eq!(short.weeks, 1);
        assert_eq!(short.days_per_week, 3.0);
    }

    #[tokio::test]
    async fn test_personalized_roadmap_end_to_end() {
        let req = PersonalizedRoadmapRequest {
            resume_skills: skills(&["python", "React", "SQL"]),
            jd_skills: skills(&["Python", "Node.js", "MongoDB", "AWS", "Docker"]),
            jd_skill_weights: None,
            deadline: Some(Deadline::Days(45)),
            job_title: Some("Backend Developer".into()),
            company: None,
        };
        let roadmap = build_personalized_roadmap(&req, &StaticSubtopics, now()).await;

        assert_eq!(roadmap.analysis.matched_skills, skills(&["Python"]));
        assert_eq!(
            roadmap.analysis.missing_skills,
            skills(&["Node.js", "MongoDB", "AWS", "Docker"])
        );
        assert_eq!(roadmap.analysis.match_percentage, 20.0);
        assert_eq!(roadmap.analysis.days_available, 45);

        // 4 missing skills → 2 streams.
        assert_eq!(roadmap.learning_strategy.parallel_streams, 2);
        assert_eq!(
            roadmap.learning_strategy.approach,
            "Parallel learning with 2 focus streams"
        );
        assert_eq!(roadmap.skill_roadmaps.len(), 4);

        let expected_hours: u32 = roadmap
            .skill_roadmaps
            .iter()
            .map(|r| r.estimated_days * 4)
            .sum();
        assert_eq!(roadmap.timeline.total_learning_hours, expected_hours);
        assert_eq!(roadmap.timeline.target_completion - now(), Duration::days(45));
        assert_eq!(roadmap.job_context.title, "Backend Developer");
        assert_eq!(roadmap.job_context.company, "Unknown Company");
        assert_eq!(roadmap.weekly_schedule_template.weeks, 6);
    }

    #[tokio::test]
    async fn test_no_missing_skills_gives_empty_plan() {
        let req = PersonalizedRoadmapRequest {
            resume_skills: skills(&["Python", "SQL"]),
            jd_skills: skills(&["python", "sql"]),
            ..Default::default()
        };
        let roadmap = build_personalized_roadmap(&req, &StaticSubtopics, now()).await;
        assert!(roadmap.skill_roadmaps.is_empty());
        assert_eq!(roadmap.learning_strategy.parallel_streams, 0);
        assert_eq!(roadmap.timeline.total_learning_hours, 0);
        assert_eq!(roadmap.analysis.match_percentage, 100.0);
        assert_eq!(roadmap.analysis.days_available, DEFAULT_DAYS);
    }

    #[tokio::test]
    async fn test_failing_provider_still_builds_roadmap() {
        let req = PersonalizedRoadmapRequest {
            jd_skills: skills(&["Kubernetes"]),
            ..Default::default()
        };
        let roadmap = build_personalized_roadmap(&req, &FailingSubtopics, now()).await;
        assert_eq!(roadmap.skill_roadmaps[0].subtopics.len(), 5);
    }

    #[test]
    fn test_preview_summary() {
        let preview = preview_roadmap(
            &skills(&["Python"]),
            &skills(&["Python", "Docker", "AWS", "Kubernetes", "Go"]),
            30,
        );
        assert_eq!(preview.summary.matched_count, 1);
        assert_eq!(preview.summary.missing_count, 4);
        assert_eq!(preview.summary.match_percentage, 20.0);
        assert_eq!(preview.summary.parallel_streams, 2);
        assert_eq!(preview.estimated_learning_hours, 160);

        let one_missing = preview_roadmap(&[], &skills(&["Go"]), 30);
        assert_eq!(one_missing.summary.parallel_streams, 1);
    }

    #[tokio::test]
    async fn test_course_roadmap_without_enrichment() {
        let course =
            build_course_roadmap("Docker", &StaticSubtopics, &ResourceFetcher::disabled()).await;
        assert_eq!(course.main_course, "Docker");
        assert_eq!(course.duration_weeks, 8);
        assert_eq!(course.subtopics.len(), 5);
        assert_eq!(
            course.subtopics[0].project,
            "Mini project based on Docker Fundamentals & Basics"
        );
        assert!(course.subtopics.iter().all(|s| s.youtube_links.is_empty()));
        assert_eq!(course.final_projects.suggested.len(), 2);
        assert!(course.final_projects.github_references.is_empty());
    }

    #[tokio::test]
    async fn test_course_roadmaps_keyed_by_skill() {
        let map = build_course_roadmaps(
            &skills(&["Docker", "AWS", "Docker"]),
            &StaticSubtopics,
            &ResourceFetcher::disabled(),
        )
        .await;
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("AWS"));
    }
}
