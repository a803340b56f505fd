//! Roadmap Distributor: spreads ranked skills across parallel learning streams.

use serde::{Deserialize, Serialize};

use crate::roadmap::ranking::RankedSkill;

/// Assumed study time, used to turn complexity into days.
pub const LEARNING_HOURS_PER_DAY: u32 = 4;
const HOURS_PER_COMPLEXITY_POINT: u32 = 10;
const MIN_SKILL_DAYS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSkill {
    pub skill: String,
    pub weight: u8,
    pub complexity: u8,
    /// 1-based stream number.
    pub parallel_stream: usize,
    /// 1-based position within the stream.
    pub stream_position: usize,
    pub total_stream_days: u32,
    pub estimated_days: u32,
    /// 0-based position in the output.
    pub order: usize,
}

/// 1 skill → 1 stream, 2–4 → 2, 5 or more → 3.
pub fn stream_count(skill_count: usize) -> usize {
    match skill_count {
        0 | 1 => 1,
        2..=4 => 2,
        _ => 3,
    }
}

/// Deals skills round-robin into streams and sizes each one.
///
/// Output is grouped by stream; `order` numbers the output sequentially.
/// No skills or no days gives an empty schedule.
pub fn distribute_skills(ranked: &[RankedSkill], days_available: u32) -> Vec<ScheduledSkill> {
    if ranked.is_empty() || days_available < 1 {
        return Vec::new();
    }

    let count = stream_count(ranked.len());
    let mut streams: Vec<Vec<&RankedSkill>> = vec![Vec::new(); count];
    for (idx, skill) in ranked.iter().enumerate() {
        streams[idx % count].push(skill);
    }

    let stream_days = (days_available / count as u32).max(1);

    streams
        .iter()
        .enumerate()
        .flat_map(|(stream_idx, stream)| {
            stream.iter().enumerate().map(move |(pos, skill)| {
                let hours = skill.complexity as u32 * HOURS_PER_COMPLEXITY_POINT;
                let wanted = (hours / LEARNING_HOURS_PER_DAY).max(MIN_SKILL_DAYS);
                (stream_idx, pos, *skill, wanted.min(stream_days))
            })
        })
        .enumerate()
        .map(|(order, (stream_idx, pos, skill, estimated_days))| ScheduledSkill {
            skill: skill.skill.clone(),
            weight: skill.weight,
            complexity: skill.complexity,
            parallel_stream: stream_idx + 1,
            stream_position: pos + 1,
            total_stream_days: stream_days,
            estimated_days,
            order,
        })
        .collect()
}
