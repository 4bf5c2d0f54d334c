//! Study planning domain models.
//!
//! Value types consumed and produced by the planner. Inputs (`Lecture`,
//! `Preferences`) are immutable for one planning run; outputs
//! (`TimeBlock`) are built fresh per run and never patched.
//!
//! # Time Model
//!
//! | Unit | Range | Meaning |
//! |------|-------|---------|
//! | minute of day | 0..=1440 | offset from local midnight |
//! | week-minute | 0.. | `day.index() * 1440 + minute_of_day` |

mod block;
mod input;
mod interval;
mod lecture;
mod preferences;
mod time;

pub use block::{sort_blocks, BlockKind, TimeBlock};
pub use input::PlanInput;
pub use interval::{is_free, Interval};
pub use lecture::{
    compute_course_targets, course_key, Lecture, DEFAULT_COLOR_HEX, DEFAULT_MULTIPLIER,
    UNTITLED_COURSE,
};
pub use preferences::{round_down_to_slot, round_up_to_slot, BlockBounds, Preferences};
pub use time::{
    hhmm_to_minutes, minutes_to_hhmm, week_minute, Day, Minute, MINUTES_PER_DAY, MINUTES_PER_WEEK,
};
