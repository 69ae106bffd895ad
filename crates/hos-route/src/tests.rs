//! Unit tests for hos-route.

use hos_core::GeoPoint;

use crate::{
    point_along, resolve_route, CityIndex, Geocoder, RouteError, RouteInfo, RouteProvider,
    RouteResult, StaticGeocoder, StraightLineEstimator,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CHICAGO: GeoPoint = GeoPoint { lat: 41.8781, lon: -87.6298 };
const DALLAS:  GeoPoint = GeoPoint { lat: 32.7767, lon: -96.7970 };

/// Provider that always fails, for exercising the fallback path.
struct DownProvider;

impl RouteProvider for DownProvider {
    fn route(&self, _: GeoPoint, _: GeoPoint) -> RouteResult<RouteInfo> {
        Err(RouteError::Provider("connection refused".into()))
    }
}

/// Provider that returns a fixed route.
struct FixedProvider(f64, f64);

impl RouteProvider for FixedProvider {
    fn route(&self, origin: GeoPoint, destination: GeoPoint) -> RouteResult<RouteInfo> {
        Ok(RouteInfo {
            distance_km:    self.0,
            duration_hours: self.1,
            geometry:       vec![origin, destination],
            estimated:      false,
        })
    }
}

// ── StraightLineEstimator ─────────────────────────────────────────────────────

#[cfg(test)]
mod estimate {
    use super::*;

    #[test]
    fn distance_and_duration_plausible() {
        let info = StraightLineEstimator::default().estimate(CHICAGO, DALLAS);
        assert!((1_200.0..1_400.0).contains(&info.distance_km), "got {}", info.distance_km);
        assert!((info.duration_hours - info.distance_km / 80.0).abs() < 1e-9);
        assert!(info.estimated);
    }

    #[test]
    fn zero_distance_has_positive_duration() {
        let info = StraightLineEstimator::default().estimate(CHICAGO, CHICAGO);
        assert_eq!(info.distance_km, 0.0);
        assert!(info.duration_hours > 0.0);
    }

    #[test]
    fn geometry_spans_endpoints() {
        let info = StraightLineEstimator::default().estimate(CHICAGO, DALLAS);
        assert!(info.geometry.len() >= 10);
        assert_eq!(info.geometry[0], CHICAGO);
        assert_eq!(*info.geometry.last().unwrap(), DALLAS);
    }

    #[test]
    fn determinism() {
        let est = StraightLineEstimator::default();
        assert_eq!(est.estimate(CHICAGO, DALLAS), est.estimate(CHICAGO, DALLAS));
    }
}

// ── resolve_route ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolve {
    use super::*;

    #[test]
    fn healthy_provider_passes_through() {
        let fallback = StraightLineEstimator::default();
        let info = resolve_route(&FixedProvider(1_450.0, 18.0), &fallback, CHICAGO, DALLAS);
        assert_eq!(info.distance_km, 1_450.0);
        assert!(!info.estimated);
    }

    #[test]
    fn failed_provider_falls_back_to_estimate() {
        let fallback = StraightLineEstimator::default();
        let info = resolve_route(&DownProvider, &fallback, CHICAGO, DALLAS);
        assert!(info.estimated);
        assert!(info.distance_km > 0.0);
        assert!(info.duration_hours > 0.0);
    }
}

// ── StaticGeocoder ────────────────────────────────────────────────────────────

#[cfg(test)]
mod geocode {
    use super::*;

    #[test]
    fn builtin_knows_major_cities() {
        let geocoder = StaticGeocoder::builtin();
        let chicago = geocoder.geocode("Chicago").unwrap();
        assert!((chicago.lat - 41.8781).abs() < 1e-6);
    }

    #[test]
    fn normalization_strips_state_and_case() {
        let geocoder = StaticGeocoder::builtin();
        assert_eq!(geocoder.geocode("Dallas, TX"), geocoder.geocode("dallas"));
        assert_eq!(geocoder.geocode("  CHICAGO , IL"), geocoder.geocode("Chicago"));
    }

    #[test]
    fn unknown_name_returns_none_then_default() {
        let geocoder = StaticGeocoder::builtin();
        assert!(geocoder.geocode("Nowheresville").is_none());

        let fallback = geocoder.geocode_or_default("Nowheresville");
        assert!(fallback.is_valid());
    }

    #[test]
    fn custom_default_centroid() {
        let geocoder = StaticGeocoder::new().with_default(CHICAGO);
        assert_eq!(geocoder.geocode_or_default("anything"), CHICAGO);
    }

    #[test]
    fn insert_overrides() {
        let mut geocoder = StaticGeocoder::builtin();
        geocoder.insert("Chicago", DALLAS);
        assert_eq!(geocoder.geocode("chicago"), Some(DALLAS));
    }
}

// ── CityIndex ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod city_index {
    use super::*;

    #[test]
    fn nearest_to_a_city_is_itself() {
        let index = CityIndex::builtin();
        assert_eq!(index.nearest(CHICAGO), Some("Chicago"));
        assert_eq!(index.nearest(DALLAS), Some("Dallas"));
    }

    #[test]
    fn nearest_to_mid_route_point() {
        let index = CityIndex::builtin();
        // Between Oklahoma City and Tulsa, closer to Oklahoma City.
        let point = GeoPoint::new(35.5, -97.2);
        assert_eq!(index.nearest(point), Some("Oklahoma City"));
    }
}

// ── point_along ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use super::*;

    #[test]
    fn endpoints() {
        let path = [CHICAGO, DALLAS];
        assert_eq!(point_along(&path, 0.0), Some(CHICAGO));
        assert_eq!(point_along(&path, 1.0), Some(DALLAS));
    }

    #[test]
    fn midpoint_of_straight_line() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 10.0);
        let mid = point_along(&[a, b], 0.5).unwrap();
        assert!((mid.lon - 5.0).abs() < 0.01, "got {mid}");
    }

    #[test]
    fn multi_segment_path() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let c = GeoPoint::new(0.0, 2.0);
        // Halfway along [a, b, c] is b.
        let mid = point_along(&[a, b, c], 0.5).unwrap();
        assert!((mid.lon - 1.0).abs() < 0.01, "got {mid}");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(point_along(&[], 0.5), None);
        assert_eq!(point_along(&[CHICAGO], 0.5), None);
        // All-coincident path returns the first point.
        assert_eq!(point_along(&[CHICAGO, CHICAGO], 0.5), Some(CHICAGO));
    }

    #[test]
    fn fraction_clamped() {
        let path = [CHICAGO, DALLAS];
        assert_eq!(point_along(&path, -0.5), Some(CHICAGO));
        assert_eq!(point_along(&path, 1.5), Some(DALLAS));
    }
}
