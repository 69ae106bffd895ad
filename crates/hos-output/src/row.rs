//! Plain data row types written by the exporter.

use hos_core::Stop;
use hos_schedule::{day_of, DailySchedule, DutySegment};

/// One itinerary stop, flattened for export.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRow {
    pub day:            u32,
    pub stop_type:      String,
    pub location:       String,
    pub distance_km:    f64,
    pub hours:          f64,
    pub duration_hours: f64,
}

impl StopRow {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            day:            day_of(stop.hours),
            stop_type:      stop.stop_type.to_string(),
            location:       stop.location.clone(),
            distance_km:    stop.distance_km,
            hours:          stop.hours,
            duration_hours: stop.duration_hours,
        }
    }
}

/// One duty-status segment of a daily timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRow {
    pub day:        u32,
    /// Log-sheet status code: `OFF`, `SB`, `D`, or `ON`.
    pub status:     &'static str,
    pub start_hour: f64,
    pub end_hour:   f64,
    pub remark:     String,
}

impl SegmentRow {
    pub fn from_segment(day: u32, segment: &DutySegment) -> Self {
        Self {
            day,
            status:     segment.status.code(),
            start_hour: segment.start_hour,
            end_hour:   segment.end_hour,
            remark:     segment.remark.clone().unwrap_or_default(),
        }
    }
}

/// Aggregate hours and cycle standing for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummaryRow {
    pub day:                      u32,
    pub driving_hours:            f64,
    pub on_duty_hours:            f64,
    pub off_duty_hours:           f64,
    pub sleeper_hours:            f64,
    pub cycle_used:               f64,
    pub requires_34_hour_restart: bool,
}

impl DaySummaryRow {
    pub fn from_schedule(schedule: &DailySchedule) -> Self {
        Self {
            day:                      schedule.day,
            driving_hours:            schedule.driving_hours,
            on_duty_hours:            schedule.on_duty_hours,
            off_duty_hours:           schedule.off_duty_hours,
            sleeper_hours:            schedule.sleeper_hours,
            cycle_used:               schedule.cycle_used,
            requires_34_hour_restart: schedule.requires_34_hour_restart,
        }
    }
}
