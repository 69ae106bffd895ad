//! The trip-planning request.

use serde::Deserialize;

use crate::{PlanError, PlanResult};

/// A request to plan one trip: deadhead to the shipper, loaded run to the
/// consignee, with `current_cycle_used` hours already spent this duty cycle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// On-duty hours already used in the rolling cycle, before this trip.
    pub current_cycle_used: f64,
}

impl TripRequest {
    pub fn new(
        current_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        current_cycle_used: f64,
    ) -> Self {
        Self {
            current_location:  current_location.into(),
            pickup_location:   pickup_location.into(),
            dropoff_location:  dropoff_location.into(),
            current_cycle_used,
        }
    }

    /// Reject requests the planner cannot meaningfully serve.
    pub fn validate(&self) -> PlanResult<()> {
        for (field, value) in [
            ("current_location", &self.current_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ] {
            if value.trim().is_empty() {
                return Err(PlanError::Request(format!("{field} must be non-empty")));
            }
        }
        if !self.current_cycle_used.is_finite() || self.current_cycle_used < 0.0 {
            return Err(PlanError::Request(format!(
                "current_cycle_used must be finite and >= 0, got {}",
                self.current_cycle_used
            )));
        }
        Ok(())
    }
}
