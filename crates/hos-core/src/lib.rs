//! `hos-core` — foundational types for the `rust_hos` trip planner.
//!
//! This crate is a dependency of every other `hos-*` crate.  It intentionally
//! has no `hos-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`duty`]    | `DutyStatus` (Off Duty / Sleeper Berth / Driving / On Duty)|
//! | [`error`]   | `HosError`, `HosResult`                                   |
//! | [`geo`]     | `GeoPoint`, haversine distance                            |
//! | [`leg`]     | `TripLeg` (validated route-provider output)               |
//! | [`rules`]   | `HosRules` — the FMCSA rule set as an explicit value      |
//! | [`stop`]    | `StopType`, `ClockSnapshot`, `Stop`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod duty;
pub mod error;
pub mod geo;
pub mod leg;
pub mod rules;
pub mod stop;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use duty::DutyStatus;
pub use error::{HosError, HosResult};
pub use geo::GeoPoint;
pub use leg::TripLeg;
pub use rules::HosRules;
pub use stop::{ClockSnapshot, Stop, StopType};

/// Length of one calendar day, in hours.  Day arithmetic throughout the
/// workspace is anchored to this constant.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Comparison tolerance for the hour/kilometre accounting.
///
/// All clocks advance by finite sums of chunk times, so accumulated error is
/// bounded well below this; threshold checks use it so a clock that is
/// `8.0 - 1e-16` counts as having reached an 8-hour limit.
pub const EPSILON: f64 = 1e-9;
