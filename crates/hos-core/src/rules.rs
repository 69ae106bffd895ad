//! The Hours-of-Service rule set as an explicit configuration value.
//!
//! # Design
//!
//! Every regulatory constant the simulator consults lives in one immutable
//! `HosRules` value that is passed into each component.  Alternate rule sets
//! (tight-limit unit tests, future jurisdiction variants) are just different
//! values — nothing is hard-coded at the call sites.
//!
//! The defaults are the FMCSA property-carrying limits: 11 h driving / 14 h
//! duty window / 10 h rest / 30-minute break after 8 h driving / 70 h
//! duty-cycle, with fuel stops planned every 1,600 km.

use crate::{HosError, HosResult};

/// Immutable Hours-of-Service rule set.
///
/// Construct with [`HosRules::fmcsa`] (or `Default`) and override fields with
/// struct-update syntax:
///
/// ```rust
/// use hos_core::HosRules;
///
/// let tight = HosRules { max_driving_hours: 2.0, ..HosRules::fmcsa() };
/// assert!(tight.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HosRules {
    /// Maximum driving hours per day before an overnight rest is forced.
    pub max_driving_hours: f64,

    /// Maximum on-duty hours per day (the 14-hour window).
    pub max_duty_hours: f64,

    /// Length of an overnight rest, in hours.
    pub min_rest_hours: f64,

    /// Continuous driving hours after which a 30-minute break is forced.
    pub break_after_hours: f64,

    /// Rolling duty-cycle limit; reaching it flags a 34-hour restart.
    pub cycle_limit_hours: f64,

    /// Kilometres between planned fuel stops (tracked from the pickup).
    pub fuel_interval_km: f64,

    /// Duration of the pickup stop (loading), in hours.
    pub pickup_duration_hours: f64,

    /// Duration of the dropoff stop (unloading), in hours.
    pub dropoff_duration_hours: f64,

    /// Duration of a fuel stop, in hours.
    pub fuel_stop_duration_hours: f64,

    /// Duration of the mandatory rest break, in hours.
    pub rest_break_duration_hours: f64,

    /// Upper bound on one simulation chunk, in hours.  Smaller chunks place
    /// stops more precisely at the cost of more iterations.
    pub max_chunk_hours: f64,

    /// Assumed average speed for straight-line route estimates, in km/h.
    pub avg_speed_kmh: f64,

    /// Hour-of-day (0–24) at which the trip departs on day 1.  Cumulative
    /// trip hours stay anchored to day-1 midnight, so `day = hours/24 + 1`
    /// holds regardless of this offset.
    pub trip_start_hour: f64,
}

impl HosRules {
    /// The FMCSA property-carrying defaults.
    pub fn fmcsa() -> Self {
        Self {
            max_driving_hours:         11.0,
            max_duty_hours:            14.0,
            min_rest_hours:            10.0,
            break_after_hours:         8.0,
            cycle_limit_hours:         70.0,
            fuel_interval_km:          1_600.0,
            pickup_duration_hours:     1.0,
            dropoff_duration_hours:    1.0,
            fuel_stop_duration_hours:  0.5,
            rest_break_duration_hours: 0.5,
            max_chunk_hours:           0.5,
            avg_speed_kmh:             80.0,
            trip_start_hour:           0.0,
        }
    }

    /// Reject rule sets under which the simulation cannot make progress.
    pub fn validate(&self) -> HosResult<()> {
        let positive = [
            ("max_driving_hours",         self.max_driving_hours),
            ("max_duty_hours",            self.max_duty_hours),
            ("min_rest_hours",            self.min_rest_hours),
            ("break_after_hours",         self.break_after_hours),
            ("cycle_limit_hours",         self.cycle_limit_hours),
            ("fuel_interval_km",          self.fuel_interval_km),
            ("pickup_duration_hours",     self.pickup_duration_hours),
            ("dropoff_duration_hours",    self.dropoff_duration_hours),
            ("fuel_stop_duration_hours",  self.fuel_stop_duration_hours),
            ("rest_break_duration_hours", self.rest_break_duration_hours),
            ("max_chunk_hours",           self.max_chunk_hours),
            ("avg_speed_kmh",             self.avg_speed_kmh),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(HosError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if self.break_after_hours > self.max_driving_hours {
            return Err(HosError::Config(format!(
                "break_after_hours ({}) must not exceed max_driving_hours ({})",
                self.break_after_hours, self.max_driving_hours
            )));
        }
        if !(0.0..crate::HOURS_PER_DAY).contains(&self.trip_start_hour) {
            return Err(HosError::Config(format!(
                "trip_start_hour must be in [0, 24), got {}",
                self.trip_start_hour
            )));
        }
        Ok(())
    }
}

impl Default for HosRules {
    fn default() -> Self {
        Self::fmcsa()
    }
}
