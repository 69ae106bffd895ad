//! `hos-output` — flat-file export of finished trip plans.
//!
//! Rendering collaborators (log-sheet generators, map viewers) consume the
//! planner's output as plain rows rather than walking the domain types.
//! This crate flattens a [`TripPlan`][hos_plan::TripPlan] into row structs
//! and writes them as CSV.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`row`]   | `StopRow`, `SegmentRow`, `DaySummaryRow`              |
//! | [`csv`]   | `CsvExporter` — three CSV files per output directory  |
//! | [`error`] | `OutputError`, `OutputResult<T>`                      |

pub mod csv;
pub mod error;
pub mod row;


pub use csv::CsvExporter;
pub use error::{OutputError, OutputResult};
pub use row::{DaySummaryRow, SegmentRow, StopRow};
