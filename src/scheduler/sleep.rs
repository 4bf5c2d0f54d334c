//! Recurring sleep placement on a week-long timeline.
//!
//! # Algorithm
//!
//! 1. Lay every lecture busy interval onto the absolute week timeline
//!    (`day.index() * 1440 + minute`).
//! 2. For each day in week order, try the fixed-length sleep interval at
//!    `day * 1440 + sleep_start`.
//! 3. On collision with any reserved interval (lectures, or sleep placed for
//!    an earlier day), shift forward one slot at a time, up to 48 hours past
//!    the desired start.
//! 4. If nothing fits inside the horizon, place it unshifted anyway.
//! 5. Reserve the placed interval (buffer-expanded) before the next day.
//!
//! The timeline is circular: Sunday's sleep running past midnight collides
//! with Monday morning and projects back onto Monday.

use tracing::warn;

use super::busy::WeekBusy;
use crate::models::{
    week_minute, Day, Interval, Minute, Preferences, TimeBlock, MINUTES_PER_DAY, MINUTES_PER_WEEK,
};

/// How far past the desired start sleep may be shifted.
pub const SLEEP_SEARCH_HORIZON: Minute = 48 * 60;

/// Places one sleep interval per day.
///
/// Returns absolute week-minute intervals in day order, or an empty list
/// when sleep is disabled (`sleep_start == sleep_end`).
pub fn place_sleep(lecture_busy: &WeekBusy, prefs: &Preferences) -> Vec<Interval> {
    let duration = prefs.sleep_duration();
    if duration <= 0 {
        return Vec::new();
    }

    let slot = prefs.slot();
    let buffer = prefs.buffer_minutes;

    let mut reserved: Vec<Interval> = Day::ALL
        .iter()
        .flat_map(|&day| {
            let offset = week_minute(day, 0);
            lecture_busy.day(day).iter().map(move |b| b.shifted(offset))
        })
        .collect();

    let mut placed = Vec::with_capacity(7);
    for day in Day::ALL {
        let desired = week_minute(day, prefs.sleep_start);

        let mut offset = 0;
        let mut found = None;
        while offset <= SLEEP_SEARCH_HORIZON {
            let candidate = Interval::new(desired + offset, desired + offset + duration);
            if !collides(&candidate, &reserved) {
                found = Some(candidate);
                break;
            }
            offset += slot;
        }

        let interval = found.unwrap_or_else(|| {
            warn!(%day, "no collision-free sleep position within horizon, keeping desired start");
            Interval::new(desired, desired + duration)
        });

        reserved.push(interval.expand_unclamped(buffer));
        placed.push(interval);
    }

    placed
}

/// Collision test on the circular week: also compares against each reserved
/// interval moved one week earlier and later.
fn collides(candidate: &Interval, reserved: &[Interval]) -> bool {
    reserved.iter().any(|r| {
        candidate.overlaps(r)
            || candidate.overlaps(&r.shifted(MINUTES_PER_WEEK))
            || candidate.overlaps(&r.shifted(-MINUTES_PER_WEEK))
    })
}

/// Splits absolute sleep intervals into per-day `"Sleep"` blocks.
///
/// Pieces past Sunday midnight wrap onto the start of the week.
pub fn project_sleep(intervals: &[Interval]) -> Vec<TimeBlock> {
    let mut blocks = Vec::new();
    for interval in intervals {
        let mut cursor = interval.start;
        while cursor < interval.end {
            let day_abs = cursor.div_euclid(MINUTES_PER_DAY);
            let day_start = day_abs * MINUTES_PER_DAY;
            let piece_end = interval.end.min(day_start + MINUTES_PER_DAY);
            let day = Day::from_index(day_abs.rem_euclid(7) as usize);
            blocks.push(TimeBlock::sleep(day, cursor - day_start, piece_end - day_start));
            cursor = piece_end;
        }
    }
    blocks
}

/// Sleep blocks for the week, projected onto days.
pub fn sleep_blocks(lecture_busy: &WeekBusy, prefs: &Preferences) -> Vec<TimeBlock> {
    project_sleep(&place_sleep(lecture_busy, prefs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lecture;

    fn prefs(sleep_start: Minute, sleep_end: Minute) -> Preferences {
        Preferences {
            sleep_start,
            sleep_end,
            buffer_minutes: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_sleep_disabled() {
        let p = prefs(600, 600);
        assert!(place_sleep(&WeekBusy::new(), &p).is_empty());
    }

    #[test]
    fn test_sleep_same_day() {
        let p = prefs(60, 420);
        let placed = place_sleep(&WeekBusy::new(), &p);
        assert_eq!(placed.len(), 7);
        assert_eq!(placed[0], Interval::new(60, 420));
        assert_eq!(placed[2], Interval::new(2 * 1440 + 60, 2 * 1440 + 420));
        for (day, interval) in Day::ALL.iter().zip(&placed) {
            assert_eq!(interval.start, week_minute(*day, 60));
        }
    }

    #[test]
    fn test_sleep_wraps_midnight() {
        let p = prefs(23 * 60, 7 * 60);
        let blocks = sleep_blocks(&WeekBusy::new(), &p);
        let total: Minute = blocks.iter().map(TimeBlock::duration).sum();
        assert_eq!(total, 7 * 480);

        let monday: Vec<&TimeBlock> = blocks.iter().filter(|b| b.day == Day::Mon).collect();
        assert_eq!(monday.len(), 2);
        // Sunday night wraps onto Monday morning
        assert!(monday.iter().any(|b| b.start == 0 && b.end == 420));
        assert!(monday.iter().any(|b| b.start == 1380 && b.end == 1440));
    }

    #[test]
    fn test_sleep_shifts_past_lecture() {
        let lectures = vec![Lecture::new("Late Lab", Day::Tue, 1380, 1440)];
        let p = prefs(23 * 60, 7 * 60);
        let busy = WeekBusy::from_lectures(&lectures, 0);
        let placed = place_sleep(&busy, &p);

        // Tuesday's sleep starts after the lab ends at midnight
        assert_eq!(placed[1].start, 2 * 1440);
        assert_eq!(placed[1].duration(), 480);
    }

    #[test]
    fn test_sleep_avoids_earlier_sleep() {
        // Tuesday night is pushed to Wed 16:00-24:00, which covers
        // Wednesday's desired 22:00 start.
        let lectures = vec![
            Lecture::new("Evening", Day::Tue, 1320, 1440),
            Lecture::new("Marathon", Day::Wed, 0, 960),
        ];
        let p = prefs(22 * 60, 6 * 60);
        let busy = WeekBusy::from_lectures(&lectures, 0);
        let placed = place_sleep(&busy, &p);

        assert_eq!(placed[1], Interval::new(2 * 1440 + 960, 3 * 1440));
        assert_eq!(placed[2].start, 3 * 1440);
        for pair in placed.windows(2) {
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn test_sleep_collides_across_week_boundary() {
        // Monday 06:00 lecture must push Sunday night's sleep.
        let lectures = vec![Lecture::new("Early", Day::Mon, 360, 420)];
        let p = prefs(23 * 60, 7 * 60);
        let busy = WeekBusy::from_lectures(&lectures, 0);
        let placed = place_sleep(&busy, &p);

        let sunday = placed[6];
        let wrapped = sunday.shifted(-MINUTES_PER_WEEK);
        assert!(!wrapped.overlaps(&Interval::new(360, 420)));
        assert!(sunday.start > 6 * 1440 + 1380);
    }

    #[test]
    fn test_sleep_fallback_when_no_room() {
        // Lectures fill every minute of the week: nothing can be placed, so
        // each day keeps its desired start.
        let lectures: Vec<Lecture> = Day::ALL
            .iter()
            .map(|&d| Lecture::new("Marathon", d, 0, 1440))
            .collect();
        let p = prefs(60, 120);
        let busy = WeekBusy::from_lectures(&lectures, 0);
        let placed = place_sleep(&busy, &p);
        assert_eq!(placed[3], Interval::new(3 * 1440 + 60, 3 * 1440 + 120));
    }

    #[test]
    fn test_project_splits_at_midnight() {
        let blocks = project_sleep(&[Interval::new(1380, 1440 + 420)]);
        assert_eq!(
            blocks,
            vec![
                TimeBlock::sleep(Day::Mon, 1380, 1440),
                TimeBlock::sleep(Day::Tue, 0, 420),
            ]
        );
    }
}
