//! `hos-route` — the routing/geocoding collaborator boundary.
//!
//! The HOS engine never talks to a routing service itself: it consumes
//! already-resolved distances and durations.  This crate defines the
//! contracts a caller satisfies before invoking the simulator, plus the
//! deterministic fallbacks the caller substitutes when a live provider
//! fails.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`provider`] | `RouteProvider` trait, `RouteInfo`, `resolve_route`      |
//! | [`estimate`] | `StraightLineEstimator` (great-circle ÷ assumed speed)   |
//! | [`geocode`]  | `Geocoder` trait, `StaticGeocoder` lookup table          |
//! | [`cities`]   | Built-in city table, `CityIndex` (R-tree nearest lookup) |
//! | [`geometry`] | `point_along` polyline interpolation                     |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                           |
//!
//! # Fallback contract
//!
//! A provider failure must never surface as a missing value downstream:
//! [`resolve_route`] substitutes a straight-line estimate (marked
//! `estimated`) and [`StaticGeocoder::geocode_or_default`] substitutes a
//! fixed centroid, so trip planning always completes — degraded, not dead.

pub mod cities;
pub mod error;
pub mod estimate;
pub mod geocode;
pub mod geometry;
pub mod provider;

#[cfg(test)]
mod tests;

pub use cities::CityIndex;
pub use error::{RouteError, RouteResult};
pub use estimate::StraightLineEstimator;
pub use geocode::{Geocoder, StaticGeocoder};
pub use geometry::point_along;
pub use provider::{resolve_route, RouteInfo, RouteProvider};
