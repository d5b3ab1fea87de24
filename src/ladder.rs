// src/ladder.rs
//
// Scoring and ordering. Pure functions of the records; no I/O.
//
// score = tier base (4 apart) + (4 - sub-tier) + LP / 100
//   Iron 4, 0 LP       →  0.0   (lowest ranked score)
//   Unranked           → -1.0

use crate::config::consts::{ POINTS_SUFFIX, TIER_BASES, UNRANKED_SCORE, WORST_SUB_TIER };
use crate::data::{ AccountRecord, ScoredRecord };

/// Base value for an upper-case tier name.
pub fn tier_base(tier: &str) -> Option<i64> {
    TIER_BASES
        .iter()
        .find(|(name, _)| *name == tier)
        .map(|&(_, base)| base)
}

/// Comparison score for one record.
/// Malformed labels degrade to base 0, sub-tier 4 and 0 LP.
pub fn score(record: &AccountRecord) -> f64 {
    if record.is_unranked() {
        return UNRANKED_SCORE;
    }

    let mut parts = record.rank_label.split_whitespace();
    let tier = parts.next().unwrap_or_default().to_uppercase();
    let base = tier_base(&tier).unwrap_or(0);

    let sub_tier = parts
        .next()
        .filter(|tok| tok.chars().all(|c| c.is_ascii_digit()))
        .and_then(|tok| tok.parse::<i64>().ok())
        .unwrap_or(WORST_SUB_TIER);
    let sub_tier_score = WORST_SUB_TIER - sub_tier;

    (base + sub_tier_score) as f64 + points(&record.points_label) as f64 / 100.0
}

/// LP value of a points label; `0` without the suffix or when unreadable.
pub fn points(label: &str) -> i64 {
    if !label.contains(POINTS_SUFFIX) {
        return 0;
    }
    label.replace(POINTS_SUFFIX, "").trim().parse().unwrap_or(0)
}

/// Score every record and order best → worst.
/// Equal scores keep their input order.
pub fn score_and_sort(records: Vec<AccountRecord>) -> Vec<ScoredRecord> {
    let mut scored: Vec<ScoredRecord> = records
        .into_iter()
        .map(|record| {
            let score = score(&record);
            ScoredRecord { record, score }
        })
        .collect();

    // `sort_by` is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parsing() {
        assert_eq!(points("82LP"), 82);
        assert_eq!(points("0 LP"), 0);
        assert_eq!(points("-"), 0);
        assert_eq!(points("xLP"), 0);
        assert_eq!(points(""), 0);
    }

    #[test]
    fn tier_bases_step_by_four() {
        let bases: Vec<i64> = TIER_BASES.iter().map(|&(_, b)| b).collect();
        assert_eq!(bases, (0..10).map(|i| i * 4).collect::<Vec<_>>());
        assert_eq!(tier_base("GRANDMASTER"), Some(32));
        assert_eq!(tier_base("Gold"), None);
    }
}
