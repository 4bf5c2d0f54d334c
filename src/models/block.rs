//! Plan output blocks.
//!
//! A [`TimeBlock`] is one entry of a week plan. Its label encodes the kind
//! and, for lectures and study, the course: `"Lecture: X"`, `"Study: X"`,
//! `"Sleep"`.

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::time::{Day, Minute};

const LECTURE_PREFIX: &str = "Lecture:";
const STUDY_PREFIX: &str = "Study:";
const SLEEP_LABEL: &str = "Sleep";

/// Kind of a plan block, decoded from its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// In-person lecture of a course.
    Lecture(String),
    /// Study session for a course.
    Study(String),
    /// Reserved sleep.
    Sleep,
    /// Unrecognised label.
    Other,
}

/// A labelled block on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Day of the week.
    pub day: Day,
    /// Start (minute of day).
    pub start: Minute,
    /// End (minute of day).
    pub end: Minute,
    /// Kind-encoding label.
    pub label: String,
}

impl TimeBlock {
    /// Creates a block with an arbitrary label.
    pub fn new(day: Day, start: Minute, end: Minute, label: impl Into<String>) -> Self {
        Self {
            day,
            start,
            end,
            label: label.into(),
        }
    }

    /// Lecture block for a course.
    pub fn lecture(day: Day, start: Minute, end: Minute, course: &str) -> Self {
        Self::new(day, start, end, format!("{LECTURE_PREFIX} {course}"))
    }

    /// Study block for a course.
    pub fn study(day: Day, start: Minute, end: Minute, course: &str) -> Self {
        Self::new(day, start, end, format!("{STUDY_PREFIX} {course}"))
    }

    /// Sleep block.
    pub fn sleep(day: Day, start: Minute, end: Minute) -> Self {
        Self::new(day, start, end, SLEEP_LABEL)
    }

    /// Duration in minutes, never negative.
    #[inline]
    pub fn duration(&self) -> Minute {
        (self.end - self.start).max(0)
    }

    /// The block's interval on its day.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Decodes the label.
    pub fn kind(&self) -> BlockKind {
        if let Some(rest) = self.label.strip_prefix(STUDY_PREFIX) {
            BlockKind::Study(rest.trim().to_string())
        } else if let Some(rest) = self.label.strip_prefix(LECTURE_PREFIX) {
            BlockKind::Lecture(rest.trim().to_string())
        } else if self.label.starts_with(SLEEP_LABEL) {
            BlockKind::Sleep
        } else {
            BlockKind::Other
        }
    }

    /// Whether this is a study block.
    #[inline]
    pub fn is_study(&self) -> bool {
        self.label.starts_with(STUDY_PREFIX)
    }

    /// Whether this block is a fixed commitment (lecture or sleep).
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.label.starts_with(LECTURE_PREFIX) || self.label.starts_with(SLEEP_LABEL)
    }

    /// Course of a lecture or study block.
    pub fn course(&self) -> Option<String> {
        match self.kind() {
            BlockKind::Lecture(c) | BlockKind::Study(c) => Some(c),
            _ => None,
        }
    }
}

/// Sorts blocks by `(day, start)`. Stable for equal keys.
pub fn sort_blocks(blocks: &mut [TimeBlock]) {
    blocks.sort_by_key(|b| (b.day.index(), b.start));
}
