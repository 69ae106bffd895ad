//! Polyline interpolation.

use hos_core::GeoPoint;

/// The point `fraction` (0–1) of the way along `path`, measured by
/// great-circle length over the polyline.
///
/// Returns `None` for paths with fewer than two points.  A degenerate path
/// (all points coincident) returns the first point.  `fraction` outside
/// `[0, 1]` is clamped.
pub fn point_along(path: &[GeoPoint], fraction: f64) -> Option<GeoPoint> {
    if path.len() < 2 {
        return None;
    }

    let seg_lengths: Vec<f64> = path
        .windows(2)
        .map(|w| w[0].distance_km(w[1]))
        .collect();
    let total: f64 = seg_lengths.iter().sum();
    if total <= 0.0 {
        return Some(path[0]);
    }

    let mut target = fraction.clamp(0.0, 1.0) * total;
    for (i, &len) in seg_lengths.iter().enumerate() {
        if target <= len {
            let t = if len > 0.0 { target / len } else { 0.0 };
            return Some(path[i].lerp(path[i + 1], t));
        }
        target -= len;
    }

    // Rounding pushed us past the final segment.
    path.last().copied()
}
