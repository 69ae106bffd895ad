//! plan_trip — end-to-end demo for the rust_hos trip planner.
//!
//! Plans a multi-day Chicago → St. Louis → Phoenix run fully offline (static
//! geocoder, straight-line routing), prints the itinerary and the per-day
//! duty logs, and exports the renderer-facing CSVs to `out/`.  Swap the
//! estimator for a live `RouteProvider` implementation to plan against real
//! road distances.

use std::fs;
use std::path::Path;

use anyhow::Result;

use hos_core::{HosRules, TripLeg};
use hos_output::CsvExporter;
use hos_plan::{PlanObserver, TripPlanner, TripRequest};
use hos_route::{StaticGeocoder, StraightLineEstimator};
use hos_schedule::DailySchedule;

// ── Constants ─────────────────────────────────────────────────────────────────

const CURRENT:          &str = "Chicago";
const PICKUP:           &str = "St. Louis";
const DROPOFF:          &str = "Phoenix";
const CYCLE_USED_HOURS: f64  = 22.5;
const DEPARTURE_HOUR:   f64  = 6.0; // 06:00 on day 1
const OUTPUT_DIR:       &str = "out";

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter;

impl PlanObserver for ProgressPrinter {
    fn on_leg_resolved(&mut self, leg: &TripLeg, estimated: bool) {
        let tag = if estimated { " (estimated)" } else { "" };
        println!(
            "  leg: {} -> {}  {:.0} km, {:.1} h{tag}",
            leg.origin, leg.destination, leg.distance_km, leg.duration_hours
        );
    }

    fn on_day(&mut self, day: &DailySchedule) {
        println!(
            "  day {}: {:.1} h driving, {:.1} h on duty, cycle {:.1} h{}",
            day.day,
            day.driving_hours,
            day.on_duty_hours,
            day.cycle_used,
            if day.requires_34_hour_restart { "  [34-hr restart due]" } else { "" }
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== plan_trip — rust_hos demo ===");
    println!("{CURRENT} -> {PICKUP} -> {DROPOFF}  |  cycle used: {CYCLE_USED_HOURS} h");
    println!();

    // 1. Rule set: FMCSA defaults with an 06:00 departure.
    let rules = HosRules { trip_start_hour: DEPARTURE_HOUR, ..HosRules::fmcsa() };

    // 2. Offline collaborators: static city table + straight-line routing.
    let estimator = StraightLineEstimator::new(rules.avg_speed_kmh);
    let planner = TripPlanner::new(estimator, StaticGeocoder::builtin(), rules)?;

    // 3. Plan the trip.
    let request = TripRequest::new(CURRENT, PICKUP, DROPOFF, CYCLE_USED_HOURS);
    println!("Planning:");
    let plan = planner.plan_observed(&request, &mut ProgressPrinter)?;
    println!();

    // 4. Itinerary.
    println!(
        "Itinerary — {:.0} km, {:.1} h driving over {} day(s){}:",
        plan.total_distance_km,
        plan.total_duration_hours,
        plan.total_days(),
        if plan.degraded { " [estimated distances]" } else { "" }
    );
    for stop in &plan.stops {
        println!(
            "  day {}  {}  {:>9}  {:6.0} km  {:4.1} h  {}",
            hos_schedule::day_of(stop.hours),
            clock(hos_schedule::time_in_day(stop.hours)),
            stop.stop_type.to_string(),
            stop.distance_km,
            stop.duration_hours,
            stop.location
        );
    }
    println!();

    // 5. Daily duty logs.
    for day in &plan.schedules {
        println!("Day {} log:", day.day);
        for segment in &day.segments {
            println!(
                "  {}-{}  {:3}  {}",
                clock(segment.start_hour),
                clock(segment.end_hour),
                segment.status.code(),
                segment.remark.as_deref().unwrap_or("")
            );
        }
    }
    println!();

    // 6. Export the renderer-facing CSVs.
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)?;
    let mut exporter = CsvExporter::new(out_dir)?;
    exporter.export_plan(&plan)?;
    exporter.finish()?;
    println!("Exported stops.csv, duty_segments.csv, daily_summaries.csv to {OUTPUT_DIR}/");

    if plan.requires_restart() {
        println!("Note: cycle limit reached during this trip; a 34-hour restart is due.");
    }

    Ok(())
}

/// `13.75` → `"13:45"`.
fn clock(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as u32;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
