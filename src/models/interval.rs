//! Half-open minute intervals.
//!
//! Used both for per-day busy lists (0..=1440) and for the absolute week
//! timeline during sleep placement.

use serde::{Deserialize, Serialize};

use super::time::{Minute, MINUTES_PER_DAY};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end. An interval ending
/// exactly where another begins does not overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Interval start (minutes, inclusive).
    pub start: Minute,
    /// Interval end (minutes, exclusive).
    pub end: Minute,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: Minute, end: Minute) -> Self {
        Self { start, end }
    }

    /// Length in minutes. Never negative.
    #[inline]
    pub fn duration(&self) -> Minute {
        (self.end - self.start).max(0)
    }

    /// Whether two intervals overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Shifts both edges by `delta` minutes.
    #[inline]
    pub fn shifted(&self, delta: Minute) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    /// Pads both sides by `buffer` minutes and clamps to a single day.
    pub fn expand(&self, buffer: Minute) -> Self {
        Self::new(
            (self.start - buffer).clamp(0, MINUTES_PER_DAY),
            (self.end + buffer).clamp(0, MINUTES_PER_DAY),
        )
    }

    /// Pads both sides by `buffer` minutes without clamping.
    ///
    /// For absolute week-minute intervals, which may legitimately run past
    /// the end of a day.
    pub fn expand_unclamped(&self, buffer: Minute) -> Self {
        Self::new(self.start - buffer, self.end + buffer)
    }

    /// Smallest edge distance between two non-overlapping intervals.
    ///
    /// `min(|self.start - other.end|, |other.start - self.end|)`.
    pub fn edge_distance(&self, other: &Self) -> Minute {
        (self.start - other.end)
            .abs()
            .min((other.start - self.end).abs())
    }
}

/// Whether `candidate` overlaps none of `busy`.
pub fn is_free(candidate: &Interval, busy: &[Interval]) -> bool {
    busy.iter().all(|b| !candidate.overlaps(b))
}
