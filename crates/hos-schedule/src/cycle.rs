//! Rolling duty-cycle accounting.
//!
//! The tracker is advisory: it accumulates each day's on-duty total and
//! flags when the cycle limit is reached, but it never inserts a 34-hour
//! restart into the schedule — that decision stays with the dispatcher.

use hos_core::EPSILON;

/// Cycle standing after a completed day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStatus {
    /// Cumulative on-duty hours in the rolling cycle after this day.
    pub cycle_used: f64,
    /// `true` once `cycle_used` has reached the cycle limit.
    pub requires_restart: bool,
}

/// Accumulates daily on-duty totals against the rolling cycle limit.
#[derive(Clone, Debug)]
pub struct CycleTracker {
    limit_hours: f64,
    used_hours: f64,
}

impl CycleTracker {
    /// Start a trip with `initial_used_hours` already spent this cycle.
    pub fn new(limit_hours: f64, initial_used_hours: f64) -> Self {
        Self { limit_hours, used_hours: initial_used_hours }
    }

    /// Charge one completed day: driving plus on-duty-not-driving hours.
    /// Off-duty and sleeper-berth time never counts.
    pub fn complete_day(&mut self, driving_hours: f64, on_duty_hours: f64) -> CycleStatus {
        self.used_hours += driving_hours + on_duty_hours;
        CycleStatus {
            cycle_used:       self.used_hours,
            requires_restart: self.used_hours + EPSILON >= self.limit_hours,
        }
    }

    pub fn used_hours(&self) -> f64 {
        self.used_hours
    }

    /// Hours left in the cycle, clamped at zero.
    pub fn remaining_hours(&self) -> f64 {
        (self.limit_hours - self.used_hours).max(0.0)
    }
}
