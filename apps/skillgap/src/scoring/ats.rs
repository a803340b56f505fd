//! ATS Score: weighted share of JD skills the resume covers.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::scoring::round_to;

/// How resume skills are compared against JD skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatchMode {
    /// Byte-for-byte equal names. Both sides normally come from the same vocabulary.
    #[default]
    Exact,
    CaseInsensitive,
}

impl SkillMatchMode {
    /// Splits `jd_skills` into (matched, missing), keeping JD order and spelling.
    pub fn partition<'a, J, R>(self, jd_skills: J, resume_skills: &[R]) -> (Vec<String>, Vec<String>)
    where
        J: IntoIterator<Item = &'a String>,
        R: AsRef<str>,
    {
        let resume: HashSet<String> = resume_skills
            .iter()
            .map(|s| self.key(s.as_ref()))
            .collect();

        jd_skills
            .into_iter()
            .cloned()
            .partition(|skill| resume.contains(&self.key(skill)))
    }

    fn key(self, skill: &str) -> String {
        match self {
            SkillMatchMode::Exact => skill.to_string(),
            SkillMatchMode::CaseInsensitive => skill.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsBand {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
}

impl AtsBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => AtsBand::Excellent,
            s if s >= 75.0 => AtsBand::Good,
            s if s >= 60.0 => AtsBand::Fair,
            s if s >= 40.0 => AtsBand::BelowAverage,
            _ => AtsBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AtsBand::Excellent => "Excellent",
            AtsBand::Good => "Good",
            AtsBand::Fair => "Fair",
            AtsBand::BelowAverage => "Below Average",
            AtsBand::Poor => "Poor",
        }
    }

    pub fn interpretation(self) -> String {
        let verdict = match self {
            AtsBand::Excellent => "Perfect candidate for this role",
            AtsBand::Good => "Well-qualified with minor skill gaps",
            AtsBand::Fair => "Qualified but needs to develop several skills",
            AtsBand::BelowAverage => "Significant skill gaps, heavy learning required",
            AtsBand::Poor => "Major skill gaps, may not be suitable",
        };
        format!("{} - {verdict}", self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtsScore {
    /// 0–100, two decimals.
    pub score: f64,
    pub matched_weight: f64,
    pub total_weight: f64,
    pub band: AtsBand,
    pub interpretation: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// `round(100 × Σ weight(matched) / Σ weight(all), 2)`; an all-zero or empty
/// weight map uses a denominator of 1.
pub fn compute_ats_score<R: AsRef<str>>(
    jd_weights: &BTreeMap<String, u8>,
    resume_skills: &[R],
    mode: SkillMatchMode,
) -> AtsScore {
    let (matched_skills, missing_skills) = mode.partition(jd_weights.keys(), resume_skills);

    let total: u32 = jd_weights.values().map(|w| *w as u32).sum();
    let total_weight = if total == 0 { 1 } else { total };
    let matched_weight: u32 = matched_skills
        .iter()
        .filter_map(|s| jd_weights.get(s))
        .map(|w| *w as u32)
        .sum();

    let score = round_to(matched_weight as f64 / total_weight as f64 * 100.0, 2);
    let band = AtsBand::from_score(score);

    AtsScore {
        score,
        matched_weight: matched_weight as f64,
        total_weight: total_weight as f64,
        band,
        interpretation: band.interpretation(),
        matched_skills,
        missing_skills,
    }
}
