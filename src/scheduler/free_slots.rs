//! Free-slot enumeration for the availability view.
//!
//! Scans fixed-size slots from `earliest_start` to `latest_end` on each day
//! and keeps those that overlap no lecture or sleep busy interval. The
//! result is for display only; the planner works from its own busy sets.

use std::collections::BTreeMap;

use super::planner::PlanContext;
use crate::models::{Day, Interval, PlanInput};

/// Free slots per day, each list ordered by start.
///
/// Every day of the week is present, possibly with an empty list.
pub fn generate_free_slots(input: &PlanInput) -> BTreeMap<Day, Vec<Interval>> {
    PlanContext::new(input).free_slots()
}

impl PlanContext {
    /// Free slots per day against this context's base busy set.
    pub fn free_slots(&self) -> BTreeMap<Day, Vec<Interval>> {
        let prefs = &self.prefs;
        let mut free = BTreeMap::new();

        for day in Day::ALL {
            let mut slots = Vec::new();
            if prefs.slot_minutes > 0 {
                let mut t = prefs.earliest_start;
                while t + prefs.slot_minutes <= prefs.latest_end {
                    let slot = Interval::new(t, t + prefs.slot_minutes);
                    if self.base_busy.is_free(day, &slot) {
                        slots.push(slot);
                    }
                    t += prefs.slot_minutes;
                }
            }
            free.insert(day, slots);
        }

        free
    }
}
