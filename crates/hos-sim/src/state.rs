//! The duty clocks as a pure value.

use hos_core::ClockSnapshot;

/// All mutable simulation state, threaded explicitly through every call.
///
/// `SimulationState` is a plain `Copy` value: the simulator takes one in and
/// returns a new one, never mutating shared state.  This keeps every step
/// replayable and lets independent trips run on separate threads without
/// coordination.
///
/// # Clock semantics
///
/// | Field                 | Reset by                                      |
/// |-----------------------|-----------------------------------------------|
/// | `driving_since_break` | REST or OVERNIGHT stop                        |
/// | `driving_today`       | OVERNIGHT stop                                |
/// | `duty_today`          | OVERNIGHT stop                                |
/// | `distance_km`/`hours` | never — cumulative over the whole trip        |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    /// Continuous driving hours since the last break.
    pub driving_since_break: f64,

    /// Driving hours accumulated since the last overnight rest.
    pub driving_today: f64,

    /// On-duty hours (driving + stationary work) since the last overnight.
    pub duty_today: f64,

    /// Cumulative distance from the trip origin, in kilometres.
    pub distance_km: f64,

    /// Cumulative hours from day-1 midnight.
    pub hours: f64,

    /// Distance at which the next fuel stop is due.  `None` until fuel
    /// tracking begins at the pickup.
    pub next_fuel_checkpoint_km: Option<f64>,
}

impl SimulationState {
    /// A fresh state departing at `trip_start_hour` on day 1, all clocks
    /// zeroed and fuel tracking off.
    pub fn fresh(trip_start_hour: f64) -> Self {
        Self {
            driving_since_break:     0.0,
            driving_today:           0.0,
            duty_today:              0.0,
            distance_km:             0.0,
            hours:                   trip_start_hour,
            next_fuel_checkpoint_km: None,
        }
    }

    /// Advance all clocks by `hours` of driving covering `km` kilometres.
    #[inline]
    pub fn advance_driving(&mut self, hours: f64, km: f64) {
        self.driving_since_break += hours;
        self.driving_today += hours;
        self.duty_today += hours;
        self.hours += hours;
        self.distance_km += km;
    }

    /// Start fuel tracking: the first checkpoint is `interval_km` ahead of
    /// the current position.
    #[inline]
    pub fn begin_fuel_tracking(&mut self, interval_km: f64) {
        self.next_fuel_checkpoint_km = Some(self.distance_km + interval_km);
    }

    /// The duty clocks at this instant, for stamping onto an emitted stop.
    #[inline]
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            driving_since_break: self.driving_since_break,
            driving_today:       self.driving_today,
            duty_today:          self.duty_today,
        }
    }
}
