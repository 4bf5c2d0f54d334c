//! Randomized study-block generation for one candidate plan.
//!
//! # Algorithm
//!
//! Repeated passes over the days in a random (per-run) order. On each day
//! visit:
//! 1. Skip the day if it already holds `max_blocks_per_day` study blocks.
//! 2. Pick a course by weighted random choice (weight = remaining minutes),
//!    avoiding the course placed last on that day unless it is the only one
//!    left.
//! 3. Size the block with [`BlockBounds::desired_length`].
//! 4. Try every slot-aligned start in the availability window in shuffled
//!    order; take the first that is free.
//!
//! Stops when every target is met, a full pass places nothing, or
//! [`MAX_ITERATIONS`] day visits have been made. Unmet targets are expected.
//!
//! [`BlockBounds::desired_length`]: crate::models::BlockBounds::desired_length

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use super::planner::PlanContext;
use crate::models::{Day, Interval, Minute, TimeBlock};

/// Upper bound on day visits in one candidate run.
pub const MAX_ITERATIONS: usize = 50_000;

/// Generates the study blocks of one candidate plan.
///
/// The context is only read; the run works on its own copy of the busy set.
/// Identical contexts and identically seeded `rng`s yield identical blocks.
pub fn generate_candidate<R: Rng + ?Sized>(ctx: &PlanContext, rng: &mut R) -> Vec<TimeBlock> {
    let prefs = &ctx.prefs;
    let bounds = ctx.bounds;
    let buffer = prefs.buffer_minutes;

    let (courses, mut remaining): (Vec<&str>, Vec<Minute>) = ctx
        .targets
        .iter()
        .filter(|(_, minutes)| **minutes > 0)
        .map(|(name, &minutes)| (name.as_str(), minutes))
        .unzip();

    let mut busy = ctx.base_busy.clone();
    let mut blocks_per_day = [0usize; 7];
    let mut last_course: [Option<usize>; 7] = [None; 7];
    let mut study = Vec::new();

    let mut day_order = Day::ALL.to_vec();
    day_order.shuffle(rng);

    let mut iterations = 0;
    'search: while remaining.iter().any(|&r| r > 0) {
        let mut progress = false;

        for &day in &day_order {
            if iterations >= MAX_ITERATIONS {
                debug!(iterations, "candidate generation hit iteration guard");
                break 'search;
            }
            iterations += 1;

            let d = day.index();
            if blocks_per_day[d] >= prefs.max_blocks_per_day {
                continue;
            }

            let Some(course) = pick_course(&remaining, last_course[d], rng) else {
                continue;
            };

            let length = bounds.desired_length(remaining[course]);
            if length <= 0 {
                continue;
            }

            let mut starts: Vec<Minute> = (prefs.earliest_start..=prefs.latest_end - length)
                .step_by(bounds.slot as usize)
                .collect();
            starts.shuffle(rng);

            let Some(start) = starts
                .into_iter()
                .find(|&t| busy.is_free(day, &Interval::new(t, t + length)))
            else {
                continue;
            };

            let block = TimeBlock::study(day, start, start + length, courses[course]);
            busy.reserve_block(&block, buffer);
            study.push(block);

            blocks_per_day[d] += 1;
            remaining[course] = (remaining[course] - length).max(0);
            last_course[d] = Some(course);
            progress = true;
        }

        if !progress {
            break;
        }
    }

    if remaining.iter().any(|&r| r > 0) {
        debug!(
            unmet = remaining.iter().filter(|&&r| r > 0).count(),
            placed = study.len(),
            "candidate left targets unmet"
        );
    }

    study
}

/// Weighted choice among courses with minutes left, skipping `avoid` when
/// another course is available.
fn pick_course<R: Rng + ?Sized>(
    remaining: &[Minute],
    avoid: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    let open: Vec<usize> = (0..remaining.len()).filter(|&i| remaining[i] > 0).collect();
    let pool: Vec<usize> = if open.len() > 1 {
        open.into_iter().filter(|&i| Some(i) != avoid).collect()
    } else {
        open
    };
    pool.choose_weighted(rng, |&i| remaining[i]).ok().copied()
}
