//! Planning preferences.
//!
//! One record configures a planning run: the daily availability window,
//! the recurring sleep interval, block-size limits, load limits, buffer
//! spacing, the number of randomized candidates, and the scoring weights.
//! Missing fields in a serialized record take their default values.

use serde::{Deserialize, Serialize};

use super::time::Minute;

/// User preferences for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Earliest study start (minute of day).
    pub earliest_start: Minute,
    /// Latest study end (minute of day).
    pub latest_end: Minute,
    /// Sleep start (minute of day).
    pub sleep_start: Minute,
    /// Sleep end (minute of day). Below `sleep_start` means sleep wraps
    /// past midnight; equal disables sleep reservation.
    pub sleep_end: Minute,

    /// Slot size: placement granularity and free-slot display size.
    pub slot_minutes: Minute,
    /// Minimum study block length.
    pub min_block: Minute,
    /// Maximum study block length.
    pub max_block: Minute,
    /// Maximum study blocks placed on one day.
    pub max_blocks_per_day: usize,
    /// Padding around every busy interval.
    pub buffer_minutes: Minute,

    /// Number of randomized candidate plans (at least one is always run).
    pub candidate_count: usize,
    /// Weight of the per-day study-minute variance penalty.
    pub weight_spread: f64,
    /// Weight of the late-in-day penalty.
    pub weight_late: f64,
    /// Weight of the per-day block-count overload penalty.
    pub weight_day_overload: f64,
    /// Weight of the adjacency-to-commitments bonus.
    pub weight_gap_bonus: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            earliest_start: 8 * 60,
            latest_end: 22 * 60,
            sleep_start: 23 * 60,
            sleep_end: 7 * 60,
            slot_minutes: 30,
            min_block: 30,
            max_block: 90,
            max_blocks_per_day: 4,
            buffer_minutes: 15,
            candidate_count: 30,
            weight_spread: 1.0,
            weight_late: 1.0,
            weight_day_overload: 1.0,
            weight_gap_bonus: 1.0,
        }
    }
}

impl Preferences {
    /// Slot size used for stepping; never below one minute.
    #[inline]
    pub fn slot(&self) -> Minute {
        self.slot_minutes.max(1)
    }

    /// Study block bounds rounded to slot multiples.
    pub fn block_bounds(&self) -> BlockBounds {
        BlockBounds::from_preferences(self)
    }

    /// Sleep length in minutes, wrapping past midnight. 0 disables sleep.
    pub fn sleep_duration(&self) -> Minute {
        if self.sleep_start == self.sleep_end {
            0
        } else if self.sleep_start < self.sleep_end {
            self.sleep_end - self.sleep_start
        } else {
            (24 * 60 - self.sleep_start) + self.sleep_end
        }
    }

    /// Number of candidates actually evaluated.
    #[inline]
    pub fn effective_candidate_count(&self) -> usize {
        self.candidate_count.max(1)
    }
}

/// Study block length limits, aligned to the slot size.
///
/// `min` is rounded up and `max` rounded down to slot multiples; if that
/// leaves `max < min`, `max` is raised to `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBounds {
    /// Slot size (≥ 1).
    pub slot: Minute,
    /// Minimum block length.
    pub min: Minute,
    /// Maximum block length.
    pub max: Minute,
}

impl BlockBounds {
    fn from_preferences(prefs: &Preferences) -> Self {
        let slot = prefs.slot();
        let min = round_up_to_slot(prefs.min_block.max(0), slot);
        let max = round_down_to_slot(prefs.max_block.max(0), slot).max(min);
        Self { slot, min, max }
    }

    /// Block length to attempt for a course with `remaining` minutes left.
    ///
    /// `min(max, remaining)` rounded down to the slot, raised to `min` when
    /// rounding drops below it.
    pub fn desired_length(&self, remaining: Minute) -> Minute {
        let desired = round_down_to_slot(self.max.min(remaining), self.slot);
        if desired < self.min {
            self.min
        } else {
            desired
        }
    }
}

/// Rounds down to a multiple of `slot`.
pub fn round_down_to_slot(n: Minute, slot: Minute) -> Minute {
    if slot <= 0 {
        return n;
    }
    n.div_euclid(slot) * slot
}

/// Rounds up to a multiple of `slot`.
pub fn round_up_to_slot(n: Minute, slot: Minute) -> Minute {
    if slot <= 0 {
        return n;
    }
    (n + slot - 1).div_euclid(slot) * slot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Preferences::default();
        assert_eq!(p.earliest_start, 480);
        assert_eq!(p.latest_end, 1320);
        assert_eq!(p.sleep_duration(), 480);
        assert_eq!(p.effective_candidate_count(), 30);
    }

    #[test]
    fn test_sleep_duration() {
        let mut p = Preferences::default();
        p.sleep_start = 60;
        p.sleep_end = 420;
        assert_eq!(p.sleep_duration(), 360);

        p.sleep_end = 60;
        assert_eq!(p.sleep_duration(), 0);
    }

    #[test]
    fn test_block_bounds_rounding() {
        let mut p = Preferences::default();
        p.slot_minutes = 30;
        p.min_block = 40;
        p.max_block = 100;
        let b = p.block_bounds();
        assert_eq!(b.min, 60);
        assert_eq!(b.max, 90);
    }

    #[test]
    fn test_block_bounds_clamps_max_up() {
        let mut p = Preferences::default();
        p.min_block = 90;
        p.max_block = 45;
        let b = p.block_bounds();
        assert_eq!(b.min, 90);
        assert_eq!(b.max, 90);
    }

    #[test]
    fn test_desired_length() {
        let b = Preferences::default().block_bounds(); // 30..90
        assert_eq!(b.desired_length(200), 90);
        assert_eq!(b.desired_length(75), 60);
        assert_eq!(b.desired_length(10), 30);
    }

    #[test]
    fn test_zero_candidates_clamped() {
        let p = Preferences {
            candidate_count: 0,
            ..Default::default()
        };
        assert_eq!(p.effective_candidate_count(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let p: Preferences = serde_json::from_str(r#"{"slot_minutes":15}"#).unwrap();
        assert_eq!(p.slot_minutes, 15);
        assert_eq!(p.max_block, 90);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_down_to_slot(95, 30), 90);
        assert_eq!(round_up_to_slot(95, 30), 120);
        assert_eq!(round_up_to_slot(90, 30), 90);
        assert_eq!(round_down_to_slot(95, 0), 95);
    }
}
