//! `TripLeg` — one resolved route segment between two named waypoints.

use crate::{HosError, HosResult};

/// A directed leg of the trip with its resolved distance and duration.
///
/// Produced from route-provider output (or the straight-line fallback) and
/// validated on construction: the simulator downstream assumes a strictly
/// positive duration and never re-checks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripLeg {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration_hours: f64,
}

impl TripLeg {
    /// Validate and construct a leg.
    ///
    /// Rejects non-finite or negative distance and non-positive duration —
    /// a zero-distance leg is legal (pickup equals dropoff) but must still
    /// carry positive duration so chunk arithmetic never divides by zero.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance_km: f64,
        duration_hours: f64,
    ) -> HosResult<Self> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() || destination.trim().is_empty() {
            return Err(HosError::InvalidInput(
                "leg origin and destination must be non-empty".into(),
            ));
        }
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(HosError::InvalidInput(format!(
                "leg {origin} -> {destination}: distance must be finite and >= 0, got {distance_km}"
            )));
        }
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(HosError::InvalidInput(format!(
                "leg {origin} -> {destination}: duration must be finite and > 0, got {duration_hours}"
            )));
        }

        Ok(Self { origin, destination, distance_km, duration_hours })
    }

    /// Average speed over the leg, in km/h.
    #[inline]
    pub fn speed_kmh(&self) -> f64 {
        self.distance_km / self.duration_hours
    }
}
