//! Stop types and the immutable `Stop` record emitted by the simulator.

use std::fmt;

use crate::DutyStatus;

// ── StopType ──────────────────────────────────────────────────────────────────

/// Why the truck is stationary.
///
/// `Start` is a zero-duration marker anchoring the itinerary's origin;
/// everything else occupies real time on the schedule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopType {
    /// Trip origin marker (zero duration).
    Start,
    /// Loading at the shipper.
    Pickup,
    /// Unloading at the consignee.
    Dropoff,
    /// Planned fuel stop.
    Fuel,
    /// Mandatory 30-minute break after continuous driving.
    Rest,
    /// Overnight rest forced by the daily driving or duty limit.
    Overnight,
}

impl StopType {
    /// The duty status this stop occupies on the daily log.
    ///
    /// `Start` never occupies log time; it maps to `OffDuty` for the
    /// degenerate zero-length case.
    pub fn duty_status(self) -> DutyStatus {
        match self {
            StopType::Start     => DutyStatus::OffDuty,
            StopType::Pickup
            | StopType::Dropoff
            | StopType::Fuel
            | StopType::Rest    => DutyStatus::OnDuty,
            StopType::Overnight => DutyStatus::SleeperBerth,
        }
    }

    /// `true` for stops that reset at least one duty clock.
    #[inline]
    pub fn is_rest(self) -> bool {
        matches!(self, StopType::Rest | StopType::Overnight)
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StopType::Start     => "START",
            StopType::Pickup    => "PICKUP",
            StopType::Dropoff   => "DROPOFF",
            StopType::Fuel      => "FUEL",
            StopType::Rest      => "REST",
            StopType::Overnight => "OVERNIGHT",
        };
        f.write_str(name)
    }
}

// ── ClockSnapshot ─────────────────────────────────────────────────────────────

/// The duty clocks as they stood at the instant a stop was emitted, before
/// any reset the stop itself performs.
///
/// Kept on every `Stop` so compliance checks can be made against the
/// finished itinerary without re-running the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockSnapshot {
    /// Continuous driving hours since the last break.
    pub driving_since_break: f64,
    /// Driving hours accumulated today.
    pub driving_today: f64,
    /// On-duty hours accumulated today.
    pub duty_today: f64,
}

// ── Stop ──────────────────────────────────────────────────────────────────────

/// One stop on the trip itinerary.  Immutable once emitted.
///
/// Stops are ordered by [`hours`][Stop::hours], which is non-decreasing
/// across the itinerary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub stop_type: StopType,

    /// Human-readable location label for the log sheet's remarks column.
    pub location: String,

    /// Cumulative distance from the trip origin, in kilometres.
    pub distance_km: f64,

    /// Cumulative hours from day-1 midnight at which the stop begins.
    pub hours: f64,

    /// How long the truck is stationary, in hours.  Zero for `Start`.
    pub duration_hours: f64,

    /// Duty clocks at the instant of emission (before this stop's resets).
    pub clocks: ClockSnapshot,
}

impl Stop {
    /// Cumulative hour at which the stop ends.
    #[inline]
    pub fn end_hours(&self) -> f64 {
        self.hours + self.duration_hours
    }
}
