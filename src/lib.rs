//! Weekly study planner.
//!
//! Allocates study time around fixed weekly lectures and a recurring sleep
//! interval, subject to an availability window, block-size limits, daily
//! load limits, and buffer spacing.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `Interval`, `Lecture`, `Preferences`,
//!   `TimeBlock`, `PlanInput`, and course target derivation
//! - **`scheduler`**: Busy sets, sleep placement, free slots, the randomized
//!   candidate generator, scoring, and the multi-candidate planner
//! - **`validation`**: Input integrity checks (ranges, inverted bounds)
//! - **`store`**: JSON persistence of the planning input
//!
//! # Entry Points
//!
//! - [`compute_course_targets`]: weekly target minutes per course
//! - [`generate_free_slots`]: free slots per day for the availability view
//! - [`build_week_plan`]: the best week plan, sorted by day and start
//!
//! The engine is deterministic: identical inputs give identical plans.
//! It never fails; a tight week yields a plan that under-fulfils targets.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;

pub use models::compute_course_targets;
pub use scheduler::{build_week_plan, generate_free_slots};
