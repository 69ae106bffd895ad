//! Built-in city centroids and the nearest-city spatial index.
//!
//! The table covers the major US freight-lane cities; it backs both the
//! offline geocoder and the `CityIndex` used to label mid-route stops
//! ("Fuel stop near Amarillo") from path geometry.

use hos_core::GeoPoint;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// `(name, lat, lon)` centroids for major US freight cities.
pub const CITIES: &[(&str, f64, f64)] = &[
    ("Albuquerque",   35.0844, -106.6504),
    ("Amarillo",      35.2220, -101.8313),
    ("Atlanta",       33.7490,  -84.3880),
    ("Boston",        42.3601,  -71.0589),
    ("Charlotte",     35.2271,  -80.8431),
    ("Chicago",       41.8781,  -87.6298),
    ("Cincinnati",    39.1031,  -84.5120),
    ("Cleveland",     41.4993,  -81.6944),
    ("Columbus",      39.9612,  -82.9988),
    ("Dallas",        32.7767,  -96.7970),
    ("Denver",        39.7392, -104.9903),
    ("Detroit",       42.3314,  -83.0458),
    ("El Paso",       31.7619, -106.4850),
    ("Houston",       29.7604,  -95.3698),
    ("Indianapolis",  39.7684,  -86.1581),
    ("Jacksonville",  30.3322,  -81.6557),
    ("Kansas City",   39.0997,  -94.5786),
    ("Las Vegas",     36.1699, -115.1398),
    ("Little Rock",   34.7465,  -92.2896),
    ("Los Angeles",   34.0522, -118.2437),
    ("Memphis",       35.1495,  -90.0490),
    ("Miami",         25.7617,  -80.1918),
    ("Minneapolis",   44.9778,  -93.2650),
    ("Nashville",     36.1627,  -86.7816),
    ("New Orleans",   29.9511,  -90.0715),
    ("New York",      40.7128,  -74.0060),
    ("Oklahoma City", 35.4676,  -97.5164),
    ("Omaha",         41.2565,  -95.9345),
    ("Philadelphia",  39.9526,  -75.1652),
    ("Phoenix",       33.4484, -112.0740),
    ("Pittsburgh",    40.4406,  -79.9959),
    ("Portland",      45.5152, -122.6784),
    ("Salt Lake City",40.7608, -111.8910),
    ("San Antonio",   29.4241,  -98.4936),
    ("Seattle",       47.6062, -122.3321),
    ("St. Louis",     38.6270,  -90.1994),
    ("Tulsa",         36.1540,  -95.9928),
];

// ── R-tree city entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with the city name.
#[derive(Clone)]
struct CityEntry {
    point: [f64; 2], // [lat, lon]
    name: &'static str,
}

impl RTreeObject for CityEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CityEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-city queries at freight-lane spacing.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CityIndex ─────────────────────────────────────────────────────────────────

/// Nearest-city lookup over the built-in table.
///
/// Used to turn an interpolated route position into a human-readable stop
/// label.  Build once per planner and reuse across trips.
pub struct CityIndex {
    tree: RTree<CityEntry>,
}

impl CityIndex {
    /// Index the built-in [`CITIES`] table.
    pub fn builtin() -> Self {
        let entries: Vec<CityEntry> = CITIES
            .iter()
            .map(|&(name, lat, lon)| CityEntry { point: [lat, lon], name })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Name of the city nearest to `point`, or `None` for an empty index.
    pub fn nearest(&self, point: GeoPoint) -> Option<&'static str> {
        self.tree
            .nearest_neighbor(&[point.lat, point.lon])
            .map(|entry| entry.name)
    }
}

impl Default for CityIndex {
    fn default() -> Self {
        Self::builtin()
    }
}
