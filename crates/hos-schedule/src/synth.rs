//! Synthesis of gap-free 24-hour duty-status timelines.

use hos_core::{DutyStatus, HosRules, Stop, StopType, EPSILON, HOURS_PER_DAY};

use crate::{CycleTracker, DayBoundStop, ScheduleError, ScheduleResult};

// ── DutySegment ───────────────────────────────────────────────────────────────

/// One contiguous block on a day's duty-status timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DutySegment {
    pub status: DutyStatus,
    /// Start hour within the day, in `[0, 24)`.
    pub start_hour: f64,
    /// End hour within the day, in `(0, 24]`.
    pub end_hour: f64,
    /// Log-sheet remark, if any.
    pub remark: Option<String>,
}

impl DutySegment {
    fn new(status: DutyStatus, start_hour: f64, end_hour: f64, remark: Option<&str>) -> Self {
        Self { status, start_hour, end_hour, remark: remark.map(str::to_owned) }
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}

// ── DailySchedule ─────────────────────────────────────────────────────────────

/// A complete duty-status timeline for one calendar day.
///
/// Segments are contiguous, non-overlapping, and span exactly `[0, 24)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySchedule {
    /// Calendar day, 1-based.
    pub day: u32,

    /// The timeline, ordered by start hour.
    pub segments: Vec<DutySegment>,

    // ── Aggregate hours by status ─────────────────────────────────────────
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub sleeper_hours: f64,

    /// Rolling cycle total after this day.
    pub cycle_used: f64,

    /// Advisory flag: the cycle limit has been reached.  The engine never
    /// inserts the restart itself.
    pub requires_34_hour_restart: bool,
}

// ── ScheduleSynthesizer ───────────────────────────────────────────────────────

/// Converts a day-assigned itinerary into per-day [`DailySchedule`]s.
///
/// # Timeline rules
///
/// - Day 1 opens off duty until the first stop (the trip may depart later
///   than midnight).
/// - Later days open with the overnight rest carried across midnight when
///   one is present, otherwise with a default sleeper-berth block of
///   `min_rest_hours` (clamped to the first stop).
/// - Any gap between stops is driving: the truck is in motion between
///   itinerary events by construction.
/// - The tail of the final day is off duty; intermediate days drive out the
///   remainder of the day.
pub struct ScheduleSynthesizer<'a> {
    rules: &'a HosRules,
}

impl<'a> ScheduleSynthesizer<'a> {
    pub fn new(rules: &'a HosRules) -> Self {
        Self { rules }
    }

    /// Build one schedule per calendar day touched by the itinerary.
    ///
    /// `initial_cycle_used` seeds the rolling cycle total.  Fails with
    /// [`ScheduleError::Invariant`] if the fragments overlap or a built day
    /// does not exactly cover 24 hours — either means an engine bug, and a
    /// malformed log must not be emitted silently.
    pub fn synthesize(
        &self,
        stops:              &[Stop],
        fragments:          &[DayBoundStop],
        initial_cycle_used: f64,
    ) -> ScheduleResult<Vec<DailySchedule>> {
        let Some(last) = fragments.last() else {
            return Ok(Vec::new());
        };
        let total_days = last.day;

        let mut tracker = CycleTracker::new(self.rules.cycle_limit_hours, initial_cycle_used);
        let mut schedules = Vec::with_capacity(total_days as usize);

        for day in 1..=total_days {
            let day_frags: Vec<&DayBoundStop> =
                fragments.iter().filter(|f| f.day == day).collect();
            let schedule =
                self.build_day(stops, &day_frags, day, day == total_days, &mut tracker)?;
            schedules.push(schedule);
        }

        Ok(schedules)
    }

    // ── Per-day construction ──────────────────────────────────────────────

    fn build_day(
        &self,
        stops:     &[Stop],
        day_frags: &[&DayBoundStop],
        day:       u32,
        is_final:  bool,
        tracker:   &mut CycleTracker,
    ) -> ScheduleResult<DailySchedule> {
        let mut segments: Vec<DutySegment> = Vec::new();
        let mut cursor = 0.0_f64;

        // ── Opening block ─────────────────────────────────────────────────
        let first_start = day_frags.first().map(|f| f.start_in_day);
        if day == 1 {
            if let Some(start) = first_start {
                if start > EPSILON {
                    segments.push(DutySegment::new(
                        DutyStatus::OffDuty, 0.0, start, Some("Off duty before trip start"),
                    ));
                    cursor = start;
                }
            }
        } else {
            let carried = day_frags.first().is_some_and(|f| {
                f.start_in_day <= EPSILON
                    && stops[f.stop_index].stop_type == StopType::Overnight
            });
            if !carried {
                // No rest carried across midnight: open with the default
                // sleeper block, clamped to the first stop of the day.
                let rest_end = self
                    .rules
                    .min_rest_hours
                    .min(first_start.unwrap_or(HOURS_PER_DAY));
                if rest_end > EPSILON {
                    segments.push(DutySegment::new(
                        DutyStatus::SleeperBerth, 0.0, rest_end, Some("Overnight rest"),
                    ));
                    cursor = rest_end;
                }
            }
        }

        // ── Walk the day's fragments ──────────────────────────────────────
        for frag in day_frags {
            if frag.start_in_day < cursor - EPSILON {
                return Err(ScheduleError::Invariant(format!(
                    "day {day}: fragment starts at {:.4} inside segment ending at {cursor:.4}",
                    frag.start_in_day
                )));
            }
            if frag.start_in_day > cursor + EPSILON {
                segments.push(DutySegment::new(
                    DutyStatus::Driving, cursor, frag.start_in_day, None,
                ));
            }
            cursor = cursor.max(frag.start_in_day);

            // Zero-length fragments (the START marker) occupy no log time.
            if frag.duration_in_day() > EPSILON {
                let stop = &stops[frag.stop_index];
                segments.push(DutySegment::new(
                    stop.stop_type.duty_status(),
                    cursor,
                    frag.end_in_day,
                    Some(stop.location.as_str()),
                ));
                cursor = frag.end_in_day;
            }
        }

        // ── Close out the day ─────────────────────────────────────────────
        if cursor < HOURS_PER_DAY - EPSILON {
            if is_final {
                segments.push(DutySegment::new(
                    DutyStatus::OffDuty, cursor, HOURS_PER_DAY, Some("Trip complete"),
                ));
            } else {
                segments.push(DutySegment::new(
                    DutyStatus::Driving, cursor, HOURS_PER_DAY, Some("Driving until end of day"),
                ));
            }
        }

        validate_coverage(day, &segments)?;

        // ── Aggregates and cycle accounting ───────────────────────────────
        let mut driving = 0.0;
        let mut on_duty = 0.0;
        let mut off_duty = 0.0;
        let mut sleeper = 0.0;
        for segment in &segments {
            match segment.status {
                DutyStatus::Driving      => driving += segment.duration(),
                DutyStatus::OnDuty       => on_duty += segment.duration(),
                DutyStatus::OffDuty      => off_duty += segment.duration(),
                DutyStatus::SleeperBerth => sleeper += segment.duration(),
            }
        }

        let status = tracker.complete_day(driving, on_duty);

        Ok(DailySchedule {
            day,
            segments,
            driving_hours:            driving,
            on_duty_hours:            on_duty,
            off_duty_hours:           off_duty,
            sleeper_hours:            sleeper,
            cycle_used:               status.cycle_used,
            requires_34_hour_restart: status.requires_restart,
        })
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Coverage tolerance: segment boundaries chain exactly by construction, so
/// anything past accumulated rounding is a real gap.
const COVERAGE_TOLERANCE: f64 = 1e-6;

fn validate_coverage(day: u32, segments: &[DutySegment]) -> ScheduleResult<()> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        return Err(ScheduleError::Invariant(format!("day {day}: empty timeline")));
    };

    if first.start_hour.abs() > COVERAGE_TOLERANCE {
        return Err(ScheduleError::Invariant(format!(
            "day {day}: timeline starts at {:.6}, not 0", first.start_hour
        )));
    }
    for pair in segments.windows(2) {
        if (pair[1].start_hour - pair[0].end_hour).abs() > COVERAGE_TOLERANCE {
            return Err(ScheduleError::Invariant(format!(
                "day {day}: gap between {:.6} and {:.6}",
                pair[0].end_hour, pair[1].start_hour
            )));
        }
    }
    for segment in segments {
        if segment.duration() < -EPSILON {
            return Err(ScheduleError::Invariant(format!(
                "day {day}: negative segment [{:.6}, {:.6}]",
                segment.start_hour, segment.end_hour
            )));
        }
    }
    if (last.end_hour - HOURS_PER_DAY).abs() > COVERAGE_TOLERANCE {
        return Err(ScheduleError::Invariant(format!(
            "day {day}: timeline ends at {:.6}, not 24", last.end_hour
        )));
    }
    Ok(())
}
