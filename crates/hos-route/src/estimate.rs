//! Deterministic straight-line route estimation.
//!
//! Used when the live provider is unavailable: great-circle distance at an
//! assumed average highway speed, with a synthesized polyline so rendering
//! still has something to draw.  The estimate is fully deterministic — the
//! same inputs always produce the same leg, which keeps degraded plans
//! reproducible.

use hos_core::GeoPoint;

use crate::provider::{RouteInfo, RouteProvider};
use crate::RouteResult;

/// Spacing of synthesized polyline points, in kilometres.
const POINT_SPACING_KM: f64 = 50.0;

/// Minimum number of polyline points regardless of distance.
const MIN_POINTS: usize = 10;

/// Great-circle route estimator.
#[derive(Debug, Clone)]
pub struct StraightLineEstimator {
    /// Assumed average speed, in km/h.
    pub avg_speed_kmh: f64,

    /// Duration floor, in hours.  A zero-distance estimate still reports
    /// this much drive time so duration stays strictly positive.
    pub min_duration_hours: f64,
}

impl StraightLineEstimator {
    pub fn new(avg_speed_kmh: f64) -> Self {
        Self { avg_speed_kmh, min_duration_hours: 0.1 }
    }

    /// Estimate a leg between two points.  Never fails.
    pub fn estimate(&self, origin: GeoPoint, destination: GeoPoint) -> RouteInfo {
        let distance_km = origin.distance_km(destination);
        let duration_hours = (distance_km / self.avg_speed_kmh).max(self.min_duration_hours);

        // Interpolated points roughly every POINT_SPACING_KM along the line.
        let segments = ((distance_km / POINT_SPACING_KM).ceil() as usize).max(MIN_POINTS);
        let geometry: Vec<GeoPoint> = (0..=segments)
            .map(|i| origin.lerp(destination, i as f64 / segments as f64))
            .collect();

        RouteInfo {
            distance_km,
            duration_hours,
            geometry,
            estimated: true,
        }
    }
}

impl Default for StraightLineEstimator {
    /// 80 km/h — a loaded truck's highway average.
    fn default() -> Self {
        Self::new(80.0)
    }
}

impl RouteProvider for StraightLineEstimator {
    fn route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<RouteInfo> {
        Ok(self.estimate(origin, destination))
    }
}
