//! Clip an interval to calendar-day boundaries.
//!
//! # Why this exists
//!
//! An overnight rest routinely straddles midnight, and a long trip can put
//! any stop across a day boundary.  Rather than scatter mod-24 arithmetic
//! through the schedule builder, the clipping lives here as a pure numeric
//! function with no knowledge of stop semantics — the same code path handles
//! a 30-minute break and a 10-hour rest, and it can be tested standalone.

use hos_core::HOURS_PER_DAY;

/// One day-bounded piece of a clipped interval.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayFragment {
    /// Calendar day, 1-based.
    pub day: u32,
    /// Start hour within the day, in `[0, 24)`.
    pub start_in_day: f64,
    /// End hour within the day, in `(0, 24]` (equal to start for a
    /// zero-length fragment).
    pub end_in_day: f64,
}

impl DayFragment {
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_in_day - self.start_in_day
    }
}

/// Calendar day (1-based) containing the cumulative hour `hours`.
#[inline]
pub fn day_of(hours: f64) -> u32 {
    (hours / HOURS_PER_DAY).floor() as u32 + 1
}

/// Hour-of-day in `[0, 24)` for the cumulative hour `hours`.
#[inline]
pub fn time_in_day(hours: f64) -> f64 {
    hours - (day_of(hours) - 1) as f64 * HOURS_PER_DAY
}

/// Clip `[start_hours, start_hours + duration_hours)` into day-bounded
/// fragments.
///
/// Fragment durations sum exactly to `duration_hours`: every subtraction
/// below removes precisely the span just emitted, so no time is created or
/// lost to rounding.  A non-positive duration produces exactly one
/// zero-length fragment at the interval's start.
pub fn clip_to_days(start_hours: f64, duration_hours: f64) -> Vec<DayFragment> {
    let mut day = day_of(start_hours);
    let mut offset = start_hours - (day - 1) as f64 * HOURS_PER_DAY;

    if duration_hours <= 0.0 {
        return vec![DayFragment { day, start_in_day: offset, end_in_day: offset }];
    }

    let mut fragments = Vec::new();
    let mut remaining = duration_hours;
    loop {
        let room = HOURS_PER_DAY - offset;
        if remaining <= room {
            fragments.push(DayFragment {
                day,
                start_in_day: offset,
                end_in_day:   offset + remaining,
            });
            break;
        }
        fragments.push(DayFragment {
            day,
            start_in_day: offset,
            end_in_day:   HOURS_PER_DAY,
        });
        remaining -= room;
        day += 1;
        offset = 0.0;
    }
    fragments
}
