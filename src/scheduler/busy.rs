//! Per-day busy interval sets.
//!
//! Every interval stored here is already buffer-expanded: a candidate block
//! is placeable iff its raw interval overlaps none of them.

use crate::models::{is_free, Day, Interval, Lecture, Minute, TimeBlock};

/// Busy intervals for each day of the week, kept sorted by start.
///
/// One planning run owns its own copy and grows it as blocks are placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekBusy {
    days: [Vec<Interval>; 7],
}

impl WeekBusy {
    /// Creates an empty busy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Busy intervals of in-person lectures, each padded by `buffer`
    /// and clamped to the day.
    pub fn from_lectures(lectures: &[Lecture], buffer: Minute) -> Self {
        let mut busy = Self::new();
        for lecture in lectures.iter().filter(|l| !l.online) {
            busy.insert(lecture.day, lecture.interval().expand(buffer));
        }
        busy
    }

    /// Adds `block` padded by `buffer`.
    pub fn reserve_block(&mut self, block: &TimeBlock, buffer: Minute) {
        self.insert(block.day, block.interval().expand(buffer));
    }

    /// Adds an already-expanded interval, keeping the day sorted.
    pub fn insert(&mut self, day: Day, interval: Interval) {
        let list = &mut self.days[day.index()];
        let pos = list.partition_point(|b| b <= &interval);
        list.insert(pos, interval);
    }

    /// Busy intervals of one day, sorted by start.
    pub fn day(&self, day: Day) -> &[Interval] {
        &self.days[day.index()]
    }

    /// Whether `interval` on `day` collides with nothing.
    pub fn is_free(&self, day: Day, interval: &Interval) -> bool {
        is_free(interval, self.day(day))
    }

    /// Total intervals across the week.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Whether no day has a busy interval.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}
