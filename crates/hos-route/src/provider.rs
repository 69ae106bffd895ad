//! Routing trait and the caller-side fallback wrapper.

use hos_core::GeoPoint;

use crate::estimate::StraightLineEstimator;
use crate::RouteResult;

// ── RouteInfo ─────────────────────────────────────────────────────────────────

/// The result of a routing query for one two-point leg.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteInfo {
    /// Road distance in kilometres.
    pub distance_km: f64,

    /// Drive time in hours.  Strictly positive even for a zero-distance leg
    /// so downstream chunk arithmetic never divides by zero.
    pub duration_hours: f64,

    /// Path polyline from origin to destination, for map rendering and stop
    /// placement.  At least two points when non-empty.
    pub geometry: Vec<GeoPoint>,

    /// `true` when this leg came from the straight-line fallback rather than
    /// a live provider.  Callers should label such results as estimated.
    pub estimated: bool,
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Pluggable routing backend.
///
/// Implement this to wire in a live routing service (OSRM, Valhalla, …).
/// The implementation owns its own timeout policy; by the time a result
/// reaches the simulator it is final.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so batch planning can share one
/// provider across worker threads.
pub trait RouteProvider: Send + Sync {
    /// Resolve distance, duration, and path geometry between two points.
    fn route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<RouteInfo>;
}

// ── Fallback wrapper ──────────────────────────────────────────────────────────

/// Query `provider`, substituting a deterministic straight-line estimate on
/// failure.
///
/// This is the fallback contract in one place: the simulator never sees a
/// provider error or a null route.  The estimate uses `fallback`'s assumed
/// average speed and is marked [`RouteInfo::estimated`].
pub fn resolve_route<P: RouteProvider>(
    provider:    &P,
    fallback:    &StraightLineEstimator,
    origin:      GeoPoint,
    destination: GeoPoint,
) -> RouteInfo {
    match provider.route(origin, destination) {
        Ok(info) => info,
        Err(_)   => fallback.estimate(origin, destination),
    }
}
