//! Name-to-coordinate resolution with a static fallback table.
//!
//! The engine never geocodes directly; the planning layer resolves names to
//! coordinates up front.  `StaticGeocoder` is both the offline default and
//! the fallback of last resort: unknown names resolve to a fixed default
//! centroid rather than failing, so a typo degrades a plan instead of
//! killing it.

use hos_core::GeoPoint;
use rustc_hash::FxHashMap;

use crate::cities::CITIES;

// ── Geocoder trait ────────────────────────────────────────────────────────────

/// Pluggable name-to-coordinate resolver.
///
/// Implementations must be `Send + Sync` for batch planning.
pub trait Geocoder: Send + Sync {
    /// Resolve `name` to coordinates, or `None` if unknown.
    fn geocode(&self, name: &str) -> Option<GeoPoint>;

    /// Resolve `name`, substituting a fixed centroid when unknown.
    ///
    /// This is the lookup the planning layer uses: it cannot fail, matching
    /// the contract that geocoding failures never reach the simulator.
    /// The default falls back to the contiguous-US geographic center;
    /// implementations may substitute their own centroid.
    fn geocode_or_default(&self, name: &str) -> GeoPoint {
        self.geocode(name)
            .unwrap_or(GeoPoint { lat: 39.8283, lon: -98.5795 })
    }
}

// ── StaticGeocoder ────────────────────────────────────────────────────────────

/// In-memory lookup table keyed by normalized city name.
///
/// Names are matched case-insensitively on the part before the first comma,
/// so `"Chicago, IL"`, `"chicago"`, and `"CHICAGO"` all hit the same entry.
pub struct StaticGeocoder {
    table: FxHashMap<String, GeoPoint>,
    default_centroid: GeoPoint,
}

impl StaticGeocoder {
    /// An empty table with the contiguous-US geographic center as default.
    pub fn new() -> Self {
        Self {
            table: FxHashMap::default(),
            // Lebanon, Kansas — geographic center of the contiguous US.
            default_centroid: GeoPoint::new(39.8283, -98.5795),
        }
    }

    /// A table pre-populated with the built-in freight-lane cities.
    pub fn builtin() -> Self {
        let mut geocoder = Self::new();
        for &(name, lat, lon) in CITIES {
            geocoder.insert(name, GeoPoint::new(lat, lon));
        }
        geocoder
    }

    /// Override the default centroid returned for unknown names.
    pub fn with_default(mut self, centroid: GeoPoint) -> Self {
        self.default_centroid = centroid;
        self
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: &str, point: GeoPoint) {
        self.table.insert(normalize(name), point);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for StaticGeocoder {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, name: &str) -> Option<GeoPoint> {
        self.table.get(&normalize(name)).copied()
    }

    /// Fall back to this table's configured centroid.
    fn geocode_or_default(&self, name: &str) -> GeoPoint {
        self.geocode(name).unwrap_or(self.default_centroid)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Lowercase the part before the first comma, trimmed.
/// `"Dallas, TX"` → `"dallas"`.
fn normalize(name: &str) -> String {
    let city = name.split(',').next().unwrap_or(name);
    city.trim().to_ascii_lowercase()
}
