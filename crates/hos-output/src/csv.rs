//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `stops.csv`
//! - `duty_segments.csv`
//! - `daily_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use hos_plan::TripPlan;

use crate::row::{DaySummaryRow, SegmentRow, StopRow};
use crate::OutputResult;

/// Writes finished trip plans to three CSV files.
pub struct CsvExporter {
    stops:     Writer<File>,
    segments:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvExporter {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stops = Writer::from_path(dir.join("stops.csv"))?;
        stops.write_record([
            "day", "stop_type", "location", "distance_km", "hours", "duration_hours",
        ])?;

        let mut segments = Writer::from_path(dir.join("duty_segments.csv"))?;
        segments.write_record(["day", "status", "start_hour", "end_hour", "remark"])?;

        let mut summaries = Writer::from_path(dir.join("daily_summaries.csv"))?;
        summaries.write_record([
            "day",
            "driving_hours",
            "on_duty_hours",
            "off_duty_hours",
            "sleeper_hours",
            "cycle_used",
            "requires_34_hour_restart",
        ])?;

        Ok(Self {
            stops,
            segments,
            summaries,
            finished: false,
        })
    }

    /// Flatten and write everything a rendering collaborator needs from
    /// `plan`.
    pub fn export_plan(&mut self, plan: &TripPlan) -> OutputResult<()> {
        let stop_rows: Vec<StopRow> = plan.stops.iter().map(StopRow::from_stop).collect();
        self.write_stops(&stop_rows)?;

        for schedule in &plan.schedules {
            let segment_rows: Vec<SegmentRow> = schedule
                .segments
                .iter()
                .map(|segment| SegmentRow::from_segment(schedule.day, segment))
                .collect();
            self.write_segments(&segment_rows)?;
            self.write_summary(&DaySummaryRow::from_schedule(schedule))?;
        }
        Ok(())
    }

    /// Write a batch of stop rows.
    pub fn write_stops(&mut self, rows: &[StopRow]) -> OutputResult<()> {
        for row in rows {
            self.stops.write_record(&[
                row.day.to_string(),
                row.stop_type.clone(),
                row.location.clone(),
                row.distance_km.to_string(),
                row.hours.to_string(),
                row.duration_hours.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Write a batch of duty-segment rows.
    pub fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        for row in rows {
            self.segments.write_record(&[
                row.day.to_string(),
                row.status.to_string(),
                row.start_hour.to_string(),
                row.end_hour.to_string(),
                row.remark.clone(),
            ])?;
        }
        Ok(())
    }

    /// Write one day-summary row.
    pub fn write_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.day.to_string(),
            row.driving_hours.to_string(),
            row.on_duty_hours.to_string(),
            row.off_duty_hours.to_string(),
            row.sleeper_hours.to_string(),
            row.cycle_used.to_string(),
            (row.requires_34_hour_restart as u8).to_string(),
        ])?;
        Ok(())
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stops.flush()?;
        self.segments.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
