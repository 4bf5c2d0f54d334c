//! Minute-of-day and day-of-week primitives.
//!
//! # Time Model
//! A [`Minute`] is an offset from local midnight (0..=1440 for a single
//! day). When reasoning across day boundaries the same type holds an
//! absolute week-minute: `day.index() * 1440 + minute_of_day`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TimeParseError;

/// Minutes from local midnight, or from Monday 00:00 on the week timeline.
pub type Minute = i64;

/// Minutes in one day.
pub const MINUTES_PER_DAY: Minute = 24 * 60;

/// Minutes in one week.
pub const MINUTES_PER_WEEK: Minute = 7 * MINUTES_PER_DAY;

/// Day of the week. Declaration order is week order (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Position in the week (Mon = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a week position. Wraps modulo 7, so index 7 is Monday again.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }

    /// Short display name ("Mon".."Sun").
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute week-minute of a minute-of-day on the given day.
#[inline]
pub fn week_minute(day: Day, minute: Minute) -> Minute {
    day.index() as Minute * MINUTES_PER_DAY + minute
}

/// Formats minutes as `hh:mm`. Hours wrap at 24.
pub fn minutes_to_hhmm(minutes: Minute) -> String {
    let h = minutes.div_euclid(60).rem_euclid(24);
    let m = minutes.rem_euclid(60);
    format!("{h:02}:{m:02}")
}

/// Parses `hh:mm` text into minutes from midnight.
///
/// Surrounding whitespace is ignored. Hours must be below 24 and minutes
/// below 60.
pub fn hhmm_to_minutes(text: &str) -> Result<Minute, TimeParseError> {
    let trimmed = text.trim();
    let (hh, mm) = trimmed
        .split_once(':')
        .ok_or_else(|| TimeParseError::MissingSeparator(trimmed.to_string()))?;

    let hours: Minute = hh
        .trim()
        .parse()
        .map_err(|_| TimeParseError::InvalidNumber(hh.to_string()))?;
    let minutes: Minute = mm
        .trim()
        .parse()
        .map_err(|_| TimeParseError::InvalidNumber(mm.to_string()))?;

    if !(0..24).contains(&hours) {
        return Err(TimeParseError::HourOutOfRange(hours));
    }
    if !(0..60).contains(&minutes) {
        return Err(TimeParseError::MinuteOutOfRange(minutes));
    }

    Ok(hours * 60 + minutes)
}
