//! JD Weighter: assigns each vocabulary skill an importance weight (3/2/1)
//! from the labelled section of the job description it appears in.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::parsing::contains_word;

/// Weight given to skills mentioned outside any labelled section.
pub const FALLBACK_WEIGHT: u8 = 2;

/// Skill name → importance weight, alphabetically ordered.
pub type SkillWeightMap = BTreeMap<String, u8>;

/// A labelled section kind: where a window starts and which keywords end it.
struct SectionRule {
    weight: u8,
    start: Regex,
    stop: Regex,
}

/// Processing order matters: must-have first, so `max` never has to downgrade.
fn section_rules() -> &'static [SectionRule] {
    static RULES: OnceLock<Vec<SectionRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let rule = |weight, start: &str, stop: &str| SectionRule {
            weight,
            start: Regex::new(start).expect("static regex"),
            stop: Regex::new(stop).expect("static regex"),
        };
        vec![
            rule(
                3,
                "must have|required",
                "good to have|preferred|nice to have|optional",
            ),
            rule(
                2,
                "good to have|preferred|nice to have",
                "must have|required|optional",
            ),
            rule(
                1,
                "optional",
                "must have|required|good to have|preferred|nice to have",
            ),
        ]
    })
}

/// Yields each section window for `rule`, left to right, without overlap.
/// A window runs from the start keyword up to (not including) the next stop
/// keyword, or to the end of the text.
fn section_windows<'t>(rule: &SectionRule, text: &'t str) -> Vec<&'t str> {
    let mut windows = Vec::new();
    let mut pos = 0;
    while let Some(start) = rule.start.find_at(text, pos) {
        let end = rule
            .stop
            .find_at(text, start.end())
            .map_or(text.len(), |stop| stop.start());
        windows.push(&text[start.start()..end]);
        pos = end.max(start.end());
    }
    windows
}

/// Builds the skill → weight map for a job description.
///
/// Windows of different kinds can overlap when keywords repeat (e.g. "required"
/// inside a nice-to-have list); skills keep the highest weight any window gives them.
pub fn weight_jd_skills<S: AsRef<str>>(jd_text: &str, vocabulary: &[S]) -> SkillWeightMap {
    let text = jd_text.to_lowercase();
    let skills: Vec<(&str, String)> = vocabulary
        .iter()
        .map(AsRef::as_ref)
        .map(|s| (s, s.trim().to_lowercase()))
        .filter(|(_, lower)| !lower.is_empty())
        .collect();

    let mut weights = SkillWeightMap::new();

    for rule in section_rules() {
        for window in section_windows(rule, &text) {
            for (skill, needle) in &skills {
                if contains_word(window, needle) {
                    let entry = weights.entry(skill.to_string()).or_insert(0);
                    *entry = (*entry).max(rule.weight);
                }
            }
        }
    }

    for (skill, needle) in &skills {
        if !weights.contains_key(*skill) && contains_word(&text, needle) {
            weights.insert(skill.to_string(), FALLBACK_WEIGHT);
        }
    }

    debug!("Weighted {} JD skills", weights.len());
    weights
}
