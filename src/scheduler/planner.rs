//! Multi-candidate week planner.
//!
//! # Algorithm
//!
//! 1. Build the base plan once: in-person lecture blocks plus sleep blocks
//!    placed around them, and the buffer-expanded busy set they induce.
//! 2. Run the randomized study-block generator `max(1, candidate_count)`
//!    times; candidate `i` gets its own `StdRng` seeded with
//!    `base_seed + i + 1`.
//! 3. Score each base + study plan and keep the best. Ties go to the lower
//!    candidate index, so parallel and sequential evaluation agree.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::busy::WeekBusy;
use super::candidate::generate_candidate;
use super::score::PlanScore;
use super::sleep::sleep_blocks;
use crate::models::{
    compute_course_targets, sort_blocks, BlockBounds, Minute, PlanInput, Preferences, TimeBlock,
};

/// Prepared, read-only inputs shared by every candidate run.
#[derive(Debug, Clone)]
pub struct PlanContext {
    /// Preferences of this run.
    pub prefs: Preferences,
    /// Slot-aligned study block bounds.
    pub bounds: BlockBounds,
    /// Weekly study target per course.
    pub targets: BTreeMap<String, Minute>,
    /// Lecture and sleep blocks.
    pub base_blocks: Vec<TimeBlock>,
    /// Buffer-expanded lecture and sleep busy intervals.
    pub base_busy: WeekBusy,
}

impl PlanContext {
    /// Prepares the base plan for `input`.
    pub fn new(input: &PlanInput) -> Self {
        let prefs = input.prefs.clone();
        let buffer = prefs.buffer_minutes;

        let mut base_busy = WeekBusy::from_lectures(&input.lectures, buffer);
        let sleep = sleep_blocks(&base_busy, &prefs);
        for block in &sleep {
            base_busy.reserve_block(block, buffer);
        }

        let mut base_blocks = sleep;
        for lecture in input.lectures.iter().filter(|l| !l.online) {
            let interval = lecture.interval();
            base_blocks.push(TimeBlock::lecture(
                lecture.day,
                interval.start,
                interval.end,
                &lecture.course(),
            ));
        }

        Self {
            bounds: prefs.block_bounds(),
            targets: compute_course_targets(&input.lectures),
            prefs,
            base_blocks,
            base_busy,
        }
    }
}

/// One evaluated candidate.
#[derive(Debug, Clone)]
struct Candidate {
    index: usize,
    seed: u64,
    blocks: Vec<TimeBlock>,
    score: PlanScore,
}

/// Chosen week plan.
#[derive(Debug, Clone)]
pub struct WeekPlan {
    /// Lecture, sleep and study blocks sorted by `(day, start)`.
    pub blocks: Vec<TimeBlock>,
    /// Score of this plan.
    pub score: PlanScore,
    /// Seed of the winning candidate.
    pub seed: u64,
    /// Weekly target per course.
    pub targets: BTreeMap<String, Minute>,
    /// Study minutes placed per course.
    pub planned: BTreeMap<String, Minute>,
}

impl WeekPlan {
    /// Per-course shortfall (`target - planned`), positive entries only.
    pub fn unmet(&self) -> BTreeMap<String, Minute> {
        self.targets
            .iter()
            .filter_map(|(course, &target)| {
                let planned = self.planned.get(course).copied().unwrap_or(0);
                (target > planned).then(|| (course.clone(), target - planned))
            })
            .collect()
    }

    /// Study blocks only.
    pub fn study_blocks(&self) -> impl Iterator<Item = &TimeBlock> {
        self.blocks.iter().filter(|b| b.is_study())
    }
}

/// Randomized multi-candidate planner.
///
/// # Example
///
/// ```
/// use study_planner::models::{Day, Lecture, PlanInput, Preferences};
/// use study_planner::scheduler::WeekPlanner;
///
/// let input = PlanInput::new(
///     vec![Lecture::new("Math", Day::Mon, 540, 600)],
///     Preferences::default(),
/// );
/// let plan = WeekPlanner::new(&input).plan();
/// assert_eq!(plan.targets["Math"], 120);
/// assert!(plan.unmet().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WeekPlanner {
    context: PlanContext,
    base_seed: u64,
    parallel: bool,
}

impl WeekPlanner {
    /// Creates a planner for `input`.
    pub fn new(input: &PlanInput) -> Self {
        Self {
            context: PlanContext::new(input),
            base_seed: 0,
            parallel: true,
        }
    }

    /// Offsets every candidate seed (candidate `i` uses `base_seed + i + 1`).
    ///
    /// Different base seeds give different but reproducible plans, e.g. one
    /// per calendar week.
    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The prepared base plan.
    pub fn context(&self) -> &PlanContext {
        &self.context
    }

    /// Seed of candidate `index`.
    #[inline]
    pub fn seed_for(&self, index: usize) -> u64 {
        self.base_seed.wrapping_add(index as u64 + 1)
    }

    /// Runs every candidate and returns the best plan.
    pub fn plan(&self) -> WeekPlan {
        let count = self.context.prefs.effective_candidate_count();
        debug!(
            candidates = count,
            courses = self.context.targets.len(),
            busy = self.context.base_busy.len(),
            parallel = self.parallel,
            "planning week"
        );

        let best = if self.parallel {
            (0..count)
                .into_par_iter()
                .map(|i| self.evaluate(i))
                .reduce_with(pick_better)
        } else {
            (0..count).map(|i| self.evaluate(i)).reduce(pick_better)
        };

        let best = best.unwrap_or_else(|| self.base_only());
        debug!(seed = best.seed, score = best.score.total, "selected plan");

        let mut planned = BTreeMap::new();
        for block in best.blocks.iter().filter(|b| b.is_study()) {
            if let Some(course) = block.course() {
                *planned.entry(course).or_insert(0) += block.duration();
            }
        }

        WeekPlan {
            blocks: best.blocks,
            score: best.score,
            seed: best.seed,
            targets: self.context.targets.clone(),
            planned,
        }
    }

    fn evaluate(&self, index: usize) -> Candidate {
        let seed = self.seed_for(index);
        let mut rng = StdRng::seed_from_u64(seed);
        let study = generate_candidate(&self.context, &mut rng);

        let mut blocks = self.context.base_blocks.clone();
        blocks.extend(study);
        sort_blocks(&mut blocks);

        let score = PlanScore::calculate(&blocks, &self.context.prefs);
        trace!(index, seed, score = score.total, "scored candidate");

        Candidate {
            index,
            seed,
            blocks,
            score,
        }
    }

    fn base_only(&self) -> Candidate {
        let mut blocks = self.context.base_blocks.clone();
        sort_blocks(&mut blocks);
        Candidate {
            index: 0,
            seed: self.seed_for(0),
            score: PlanScore::calculate(&blocks, &self.context.prefs),
            blocks,
        }
    }
}

/// Higher score wins; equal scores keep the lower candidate index.
fn pick_better(a: Candidate, b: Candidate) -> Candidate {
    let b_wins = b.score.total > a.score.total
        || (b.score.total == a.score.total && b.index < a.index);
    if b_wins {
        b
    } else {
        a
    }
}

/// Builds the best week plan for `input`, sorted by `(day, start)`.
pub fn build_week_plan(input: &PlanInput) -> Vec<TimeBlock> {
    WeekPlanner::new(input).plan().blocks
}
