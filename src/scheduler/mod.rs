//! Study scheduling engine.
//!
//! Derives busy time from lectures, places sleep around it, enumerates
//! free slots, and selects the best of many randomized study plans.
//!
//! # Pipeline
//!
//! ```text
//! lectures ─► WeekBusy ─► sleep placement ─► PlanContext
//!                                              ├─► free slots (display)
//!                                              └─► candidates ─► PlanScore ─► best WeekPlan
//! ```
//!
//! # Algorithm
//!
//! The candidate generator is a stochastic greedy search, not a solver:
//! it may leave targets unmet on tight weeks. Each candidate owns its
//! random stream and busy-set copy, so candidates run in parallel without
//! shared mutable state.

mod busy;
mod candidate;
mod free_slots;
mod planner;
mod score;
mod sleep;

pub use busy::WeekBusy;
pub use candidate::{generate_candidate, MAX_ITERATIONS};
pub use free_slots::generate_free_slots;
pub use planner::{build_week_plan, PlanContext, WeekPlan, WeekPlanner};
pub use score::{
    score_plan, PlanScore, GAP_BONUS_RANGE, GAP_BONUS_RATE, NO_STUDY_SCORE, VARIETY_WEIGHT,
};
pub use sleep::{place_sleep, project_sleep, sleep_blocks, SLEEP_SEARCH_HORIZON};
