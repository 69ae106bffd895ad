//! `hos-schedule` — from a stop itinerary to per-day duty-status timelines.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`clip`]  | `DayFragment`, `clip_to_days` — pure interval clipping      |
//! | [`day`]   | `DayBoundStop`, `SplitInfo`, `assign_days`                  |
//! | [`synth`] | `DutySegment`, `DailySchedule`, `ScheduleSynthesizer`       |
//! | [`cycle`] | `CycleTracker`, `CycleStatus`                               |
//! | [`error`] | `ScheduleError`, `ScheduleResult<T>`                        |
//!
//! # Day model (summary)
//!
//! Cumulative trip hours are anchored to day-1 midnight:
//!
//! ```text
//! day         = floor(hours / 24) + 1
//! time_in_day = hours mod 24
//! ```
//!
//! A stop whose interval crosses midnight is clipped into day-bounded
//! fragments whose durations sum exactly to the stop's duration.  Each day's
//! fragments are then walked in order to synthesize a gap-free 24-hour
//! timeline: gaps between stops are driving, stops map to their duty status,
//! and the tail of the day is driving (intermediate days) or off duty (the
//! final day).

pub mod clip;
pub mod cycle;
pub mod day;
pub mod error;
pub mod synth;

#[cfg(test)]
mod tests;

pub use clip::{clip_to_days, day_of, time_in_day, DayFragment};
pub use cycle::{CycleStatus, CycleTracker};
pub use day::{assign_days, DayBoundStop, SplitInfo};
pub use error::{ScheduleError, ScheduleResult};
pub use synth::{DailySchedule, DutySegment, ScheduleSynthesizer};
