//! Week plan quality score.
//!
//! Combines five terms computed from a complete week of blocks.
//!
//! # Terms
//!
//! | Term | Definition | Sign |
//! |------|-----------|------|
//! | Spread | Population variance of study minutes per day (7 days) | − `weight_spread` |
//! | Lateness | Σ minutes × clamp((start − earliest) / window, 0, 1)² | − `weight_late` |
//! | Overload | Σ max(0, blocks − max_blocks_per_day)² per day | − `weight_day_overload` |
//! | Gap bonus | Σ (60 − d) × 0.25 for study blocks within 60 min of a lecture/sleep edge | + `weight_gap_bonus` |
//! | Variety | Adjacent same-course study pairs per day | − 0.75 (fixed) |
//!
//! Higher is better. A plan with no study blocks scores [`NO_STUDY_SCORE`].

use crate::models::{Day, Interval, Minute, Preferences, TimeBlock};

/// Score of a plan without any study blocks.
pub const NO_STUDY_SCORE: f64 = -1e9;

/// Distance (minutes) within which study earns the adjacency bonus.
pub const GAP_BONUS_RANGE: Minute = 60;

/// Bonus per minute closer than [`GAP_BONUS_RANGE`].
pub const GAP_BONUS_RATE: f64 = 0.25;

/// Fixed weight of the variety penalty.
pub const VARIETY_WEIGHT: f64 = 0.75;

/// Plan score with its raw (unweighted) components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanScore {
    /// Variance of study minutes per day.
    pub spread: f64,
    /// Quadratic late-placement penalty.
    pub lateness: f64,
    /// Squared per-day block-count excess.
    pub overload: f64,
    /// Adjacency-to-commitments bonus.
    pub gap_bonus: f64,
    /// Count of adjacent same-course study pairs.
    pub variety: f64,
    /// Weighted total (higher is better).
    pub total: f64,
}

impl PlanScore {
    /// Scores a complete week of blocks.
    ///
    /// Study blocks are recognised by their `"Study:"` label; lecture and
    /// sleep blocks only feed the gap bonus.
    pub fn calculate(blocks: &[TimeBlock], prefs: &Preferences) -> Self {
        let studies: Vec<&TimeBlock> = blocks.iter().filter(|b| b.is_study()).collect();
        if studies.is_empty() {
            return Self {
                spread: 0.0,
                lateness: 0.0,
                overload: 0.0,
                gap_bonus: 0.0,
                variety: 0.0,
                total: NO_STUDY_SCORE,
            };
        }

        let mut minutes_by_day = [0.0f64; 7];
        let mut blocks_by_day = [0usize; 7];
        let mut lateness = 0.0;
        let window = prefs.latest_end - prefs.earliest_start;

        for b in &studies {
            let minutes = b.duration() as f64;
            minutes_by_day[b.day.index()] += minutes;
            blocks_by_day[b.day.index()] += 1;
            if window > 0 {
                let x = (b.start - prefs.earliest_start) as f64 / window as f64;
                lateness += x.clamp(0.0, 1.0).powi(2) * minutes;
            }
        }

        let mean = minutes_by_day.iter().sum::<f64>() / 7.0;
        let spread = minutes_by_day
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / 7.0;

        let overload = blocks_by_day
            .iter()
            .map(|&n| {
                let over = n.saturating_sub(prefs.max_blocks_per_day) as f64;
                over * over
            })
            .sum::<f64>();

        let gap_bonus = gap_bonus(blocks, &studies);
        let variety = variety_penalty(&studies);

        let total = -prefs.weight_spread * spread - prefs.weight_late * lateness
            + prefs.weight_gap_bonus * gap_bonus
            - prefs.weight_day_overload * overload
            - VARIETY_WEIGHT * variety;

        Self {
            spread,
            lateness,
            overload,
            gap_bonus,
            variety,
            total,
        }
    }
}

/// Scalar score of a complete week of blocks.
pub fn score_plan(blocks: &[TimeBlock], prefs: &Preferences) -> f64 {
    PlanScore::calculate(blocks, prefs).total
}

fn gap_bonus(blocks: &[TimeBlock], studies: &[&TimeBlock]) -> f64 {
    let mut fixed: [Vec<Interval>; 7] = Default::default();
    for b in blocks.iter().filter(|b| b.is_fixed()) {
        fixed[b.day.index()].push(b.interval());
    }

    studies
        .iter()
        .filter_map(|s| {
            let study = s.interval();
            fixed[s.day.index()]
                .iter()
                .map(|f| study.edge_distance(f))
                .min()
        })
        .filter(|&d| d <= GAP_BONUS_RANGE)
        .map(|d| (GAP_BONUS_RANGE - d) as f64 * GAP_BONUS_RATE)
        .sum()
}

fn variety_penalty(studies: &[&TimeBlock]) -> f64 {
    let mut penalty = 0.0;
    for day in Day::ALL {
        let mut day_studies: Vec<&TimeBlock> =
            studies.iter().copied().filter(|b| b.day == day).collect();
        day_studies.sort_by_key(|b| b.start);
        for pair in day_studies.windows(2) {
            if pair[0].course() == pair[1].course() {
                penalty += 1.0;
            }
        }
    }
    penalty
}
