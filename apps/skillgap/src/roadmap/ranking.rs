use serde::{Deserialize, Serialize};

use crate::parsing::jd_weighter::SkillWeightMap;

const CORE_SKILLS: &[&str] = &["python", "java", "javascript", "sql", "react", "node", "express"];
const INFRA_SKILLS: &[&str] = &["aws", "docker", "kubernetes", "git", "linux"];

/// Ordered; the first key contained in the lowercased skill name wins.
const COMPLEXITY_TABLE: &[(&str, u8)] = &[
    ("machine learning", 5),
    ("deep learning", 5),
    ("tensorflow", 5),
    ("pytorch", 5),
    ("kubernetes", 5),
    ("distributed systems", 5),
    ("system design", 5),
    ("aws", 4),
    ("azure", 4),
    ("gcp", 4),
    ("devops", 4),
    ("microservices", 4),
    ("docker", 4),
    ("data engineering", 4),
    ("apache spark", 4),
    ("react", 3),
    ("node.js", 3),
    ("express", 3),
    ("sql", 3),
    ("mongodb", 3),
    ("python", 3),
    ("java", 3),
    ("javascript", 3),
    ("rest api", 3),
    ("html", 2),
    ("css", 2),
    ("git", 2),
    ("linux", 2),
    ("npm", 2),
    ("yarn", 2),
    ("communication", 1),
    ("problem solving", 1),
    ("teamwork", 1),
];

const DEFAULT_COMPLEXITY: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSkill {
    pub skill: String,
    pub weight: u8,
    /// 1 (very easy) to 5 (very hard).
    pub complexity: u8,
}

/// Learning complexity on a 1–5 scale.
pub fn estimate_complexity(skill: &str) -> u8 {
    let lowered = skill.to_lowercase();
    COMPLEXITY_TABLE
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map_or(DEFAULT_COMPLEXITY, |(_, c)| *c)
}

fn default_weight(lowered: &str) -> u8 {
    if CORE_SKILLS.contains(&lowered) {
        3
    } else if INFRA_SKILLS.contains(&lowered) {
        2
    } else {
        1
    }
}

/// JD weight by exact name, then lowercase name; absent or zero falls back to
/// the built-in core/infrastructure tiers.
pub fn skill_weight(skill: &str, jd_weights: Option<&SkillWeightMap>) -> u8 {
    let lowered = skill.to_lowercase();
    let from_jd = jd_weights
        .and_then(|w| w.get(skill).or_else(|| w.get(&lowered)))
        .copied()
        .unwrap_or(0);

    if from_jd == 0 {
        default_weight(&lowered)
    } else {
        from_jd
    }
}

/// Orders missing skills by weight, then complexity, both descending.
/// Ties keep input order.
pub fn rank_skills(missing: &[String], jd_weights: Option<&SkillWeightMap>) -> Vec<RankedSkill> {
    let mut ranked: Vec<RankedSkill> = missing
        .iter()
        .map(|skill| RankedSkill {
            skill: skill.clone(),
            weight: skill_weight(skill, jd_weights),
            complexity: estimate_complexity(skill),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.weight
            .cmp(&a.weight)
            .then_with(|| b.complexity.cmp(&a.complexity))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_complexity_first_match_wins() {
        assert_eq!(estimate_complexity("Machine Learning"), 5);
        assert_eq!(estimate_complexity("Docker"), 4);
        assert_eq!(estimate_complexity("Node.js"), 3);
        assert_eq!(estimate_complexity("Git"), 2);
        assert_eq!(estimate_complexity("Teamwork"), 1);
        assert_eq!(estimate_complexity("Figma"), 3);
        // "aws" is listed before "javascript", so a combined name lands in tier 4.
        assert_eq!(estimate_complexity("AWS JavaScript SDK"), 4);
    }

    #[test]
    fn test_weight_prefers_jd_then_defaults() {
        let jd: SkillWeightMap = [("Docker".to_string(), 3), ("mongodb".to_string(), 2)]
            .into_iter()
            .collect();
        assert_eq!(skill_weight("Docker", Some(&jd)), 3);
        assert_eq!(skill_weight("MongoDB", Some(&jd)), 2);
        assert_eq!(skill_weight("Python", Some(&jd)), 3);
        assert_eq!(skill_weight("Linux", None), 2);
        assert_eq!(skill_weight("Figma", None), 1);
    }

    #[test]
    fn test_zero_jd_weight_falls_back() {
        let jd: SkillWeightMap = [("Git".to_string(), 0)].into_iter().collect();
        assert_eq!(skill_weight("Git", Some(&jd)), 2);
    }

    #[test]
    fn test_rank_orders_by_weight_then_complexity() {
        let ranked = rank_skills(&skills(&["Git", "Figma", "Kubernetes", "SQL", "Python"]), None);
        let order: Vec<&str> = ranked.iter().map(|r| r.skill.as_str()).collect();
        // SQL and Python tie at (3, 3) and keep input order.
        assert_eq!(order, vec!["SQL", "Python", "Kubernetes", "Git", "Figma"]);
    }
}
