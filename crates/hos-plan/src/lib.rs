//! `hos-plan` — the trip-planning pipeline, end to end.
//!
//! # Pipeline
//!
//! ```text
//! TripRequest
//!   ① Geocode   — names → coordinates (static table, centroid fallback)
//!   ② Route     — coordinates → legs (provider, straight-line fallback)
//!   ③ Simulate  — legs → stop itinerary (hos-sim, clocks threaded through)
//!   ④ Assign    — stops → day-bounded fragments (hos-schedule)
//!   ⑤ Synthesize— fragments → gap-free DailySchedules + cycle accounting
//! TripPlan
//! ```
//!
//! Steps ① and ② are the only ones that touch collaborator contracts; both
//! degrade deterministically instead of failing, and the resulting plan is
//! marked [`TripPlan::degraded`] so callers can label estimates as such.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `plan_batch` on Rayon's thread pool.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_plan::{TripPlanner, TripRequest};
//!
//! let planner = TripPlanner::offline();
//! let plan = planner.plan(&TripRequest::new("Chicago", "St. Louis", "Dallas", 12.5))?;
//! for day in &plan.schedules {
//!     println!("day {}: {:.1} h driving", day.day, day.driving_hours);
//! }
//! ```

pub mod error;
pub mod loader;
pub mod observer;
pub mod planner;
pub mod request;

mod batch;


pub use error::{PlanError, PlanResult};
pub use loader::{load_requests_csv, load_requests_reader};
pub use observer::{NoopPlanObserver, PlanObserver};
pub use planner::{LegSummary, TripPlan, TripPlanner};
pub use request::TripRequest;
