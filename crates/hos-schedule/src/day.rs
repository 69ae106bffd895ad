//! Projection of itinerary stops onto calendar days.

use hos_core::Stop;

use crate::clip::clip_to_days;

// ── SplitInfo ─────────────────────────────────────────────────────────────────

/// Metadata carried by each fragment of a stop that crosses one or more day
/// boundaries.  Absent on stops contained within a single day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitInfo {
    /// Position of this fragment within the split, 0-based.
    pub fragment_index: usize,
    /// Total number of fragments the stop was split into.
    pub fragment_count: usize,
    /// The unsplit stop duration, in hours.
    pub original_duration_hours: f64,
}

// ── DayBoundStop ──────────────────────────────────────────────────────────────

/// A stop's projection onto one calendar day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayBoundStop {
    /// Calendar day, 1-based.
    pub day: u32,
    /// Start hour within the day, in `[0, 24)`.
    pub start_in_day: f64,
    /// End hour within the day, in `(0, 24]`.
    pub end_in_day: f64,
    /// Index of the source stop in the itinerary.
    pub stop_index: usize,
    /// Split metadata when the source stop spans a day boundary.
    pub split: Option<SplitInfo>,
}

impl DayBoundStop {
    #[inline]
    pub fn duration_in_day(&self) -> f64 {
        self.end_in_day - self.start_in_day
    }
}

// ── assign_days ───────────────────────────────────────────────────────────────

/// Map every stop onto calendar days, splitting boundary-crossing stops.
///
/// The result is sorted by `(day, start_in_day)`; within one stop the
/// fragments appear in day order.  Fragment durations for a split stop sum
/// exactly to the stop's duration (see [`clip_to_days`]).
pub fn assign_days(stops: &[Stop]) -> Vec<DayBoundStop> {
    let mut out = Vec::with_capacity(stops.len());

    for (stop_index, stop) in stops.iter().enumerate() {
        let fragments = clip_to_days(stop.hours, stop.duration_hours);
        let count = fragments.len();

        for (fragment_index, fragment) in fragments.into_iter().enumerate() {
            out.push(DayBoundStop {
                day:          fragment.day,
                start_in_day: fragment.start_in_day,
                end_in_day:   fragment.end_in_day,
                stop_index,
                split: (count > 1).then(|| SplitInfo {
                    fragment_index,
                    fragment_count: count,
                    original_duration_hours: stop.duration_hours,
                }),
            });
        }
    }

    // Stops are emitted in cumulative-hour order, so this is nearly sorted
    // already; the sort is a cheap guarantee for downstream walking.
    out.sort_by(|a, b| {
        a.day
            .cmp(&b.day)
            .then(a.start_in_day.total_cmp(&b.start_in_day))
            .then(a.stop_index.cmp(&b.stop_index))
    });
    out
}
