//! Planning observer trait for progress reporting.

use hos_core::{Stop, TripLeg};
use hos_schedule::DailySchedule;

use crate::TripPlan;

/// Callbacks invoked by [`TripPlanner::plan_observed`][crate::TripPlanner::plan_observed]
/// at key points in the pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl PlanObserver for ProgressPrinter {
///     fn on_day(&mut self, day: &DailySchedule) {
///         println!("day {}: {:.1} h driving", day.day, day.driving_hours);
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once per leg after route resolution, before simulation.
    /// `estimated` is `true` when the straight-line fallback was used.
    fn on_leg_resolved(&mut self, _leg: &TripLeg, _estimated: bool) {}

    /// Called for every stop on the finished itinerary, in order.
    fn on_stop(&mut self, _stop: &Stop) {}

    /// Called for every synthesized day, in order.
    fn on_day(&mut self, _schedule: &DailySchedule) {}

    /// Called once after the plan is fully assembled.
    fn on_plan_complete(&mut self, _plan: &TripPlan) {}
}

/// A [`PlanObserver`] that does nothing.  Use when you need to call
/// `plan_observed` but don't want progress callbacks.
pub struct NoopPlanObserver;

impl PlanObserver for NoopPlanObserver {}
