//! Lecture model and per-course study targets.
//!
//! A lecture is a fixed weekly commitment. Every lecture (online or not)
//! earns its course `round(duration * multiplier)` minutes of study per
//! week; only in-person lectures occupy busy time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::time::{Day, Minute};

/// Course name used when a lecture's name is blank.
pub const UNTITLED_COURSE: &str = "untitled course";

/// Default study multiplier (two minutes of study per lecture minute).
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Default display colour.
pub const DEFAULT_COLOR_HEX: &str = "#4e79a7";

/// A recurring weekly lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    /// Course name as entered (normalised by [`course_key`]).
    pub course_name: String,
    /// Day of the week.
    pub day: Day,
    /// Start (minute of day).
    pub start: Minute,
    /// End (minute of day). `end <= start` means zero duration.
    pub end: Minute,
    /// Study minutes per lecture minute (≥ 0).
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Online lectures count toward targets but do not block time.
    #[serde(default)]
    pub online: bool,
    /// Display colour, carried for the presentation layer.
    #[serde(default = "default_color_hex")]
    pub color_hex: String,
}

fn default_multiplier() -> f64 {
    DEFAULT_MULTIPLIER
}

fn default_color_hex() -> String {
    DEFAULT_COLOR_HEX.to_string()
}

impl Lecture {
    /// Creates an in-person lecture with the default multiplier.
    pub fn new(course_name: impl Into<String>, day: Day, start: Minute, end: Minute) -> Self {
        Self {
            course_name: course_name.into(),
            day,
            start,
            end,
            multiplier: DEFAULT_MULTIPLIER,
            online: false,
            color_hex: default_color_hex(),
        }
    }

    /// Sets the study multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Marks the lecture as online.
    pub fn with_online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    /// Sets the display colour.
    pub fn with_color(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = color_hex.into();
        self
    }

    /// Lecture length in minutes (0 if `end <= start`).
    #[inline]
    pub fn duration_minutes(&self) -> Minute {
        (self.end - self.start).max(0)
    }

    /// Weekly study minutes this lecture contributes to its course.
    ///
    /// Exact halves round to the even neighbour (52.5 -> 52).
    pub fn target_study_minutes(&self) -> Minute {
        let raw = self.duration_minutes() as f64 * self.multiplier.max(0.0);
        raw.round_ties_even() as Minute
    }

    /// Normalised course name.
    pub fn course(&self) -> String {
        course_key(&self.course_name)
    }

    /// Occupied interval on the lecture's day.
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.start.max(self.end))
    }
}

/// Trims a course name; blank names map to [`UNTITLED_COURSE`].
pub fn course_key(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNTITLED_COURSE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Total weekly study target per course.
///
/// Sums [`Lecture::target_study_minutes`] grouped by [`course_key`]. The
/// result does not depend on lecture order. Courses whose lectures all have
/// zero duration still appear, with a target of 0.
pub fn compute_course_targets(lectures: &[Lecture]) -> BTreeMap<String, Minute> {
    let mut totals = BTreeMap::new();
    for lecture in lectures {
        *totals.entry(lecture.course()).or_insert(0) += lecture.target_study_minutes();
    }
    totals
}
