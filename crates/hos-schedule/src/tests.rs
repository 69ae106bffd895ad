//! Unit tests for day clipping, day assignment, synthesis, and the cycle
//! tracker.

use hos_core::{ClockSnapshot, DutyStatus, HosRules, Stop, StopType, HOURS_PER_DAY};

use crate::{
    assign_days, clip_to_days, day_of, time_in_day, CycleTracker, DailySchedule,
    ScheduleSynthesizer,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn stop(stop_type: StopType, hours: f64, duration_hours: f64) -> Stop {
    Stop {
        stop_type,
        location: format!("{stop_type} stop"),
        distance_km: 0.0,
        hours,
        duration_hours,
        clocks: ClockSnapshot::default(),
    }
}

fn assert_covers_day(schedule: &DailySchedule) {
    assert!(!schedule.segments.is_empty(), "day {} empty", schedule.day);
    assert!(schedule.segments[0].start_hour.abs() < 1e-6);
    for pair in schedule.segments.windows(2) {
        assert!(
            (pair[1].start_hour - pair[0].end_hour).abs() < 1e-6,
            "day {}: gap between {} and {}",
            schedule.day, pair[0].end_hour, pair[1].start_hour
        );
    }
    let last = schedule.segments.last().unwrap();
    assert!((last.end_hour - HOURS_PER_DAY).abs() < 1e-6);
}

// ── clip_to_days ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod clip {
    use super::*;

    #[test]
    fn day_arithmetic() {
        assert_eq!(day_of(0.0), 1);
        assert_eq!(day_of(23.99), 1);
        assert_eq!(day_of(24.0), 2);
        assert_eq!(day_of(50.0), 3);
        assert!((time_in_day(0.0) - 0.0).abs() < 1e-12);
        assert!((time_in_day(26.5) - 2.5).abs() < 1e-12);
        assert!((time_in_day(24.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn interval_within_one_day() {
        let frags = clip_to_days(8.0, 0.5);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].day, 1);
        assert!((frags[0].start_in_day - 8.0).abs() < 1e-12);
        assert!((frags[0].end_in_day - 8.5).abs() < 1e-12);
    }

    #[test]
    fn interval_crossing_midnight() {
        // Overnight rest from hour 18 to hour 28.
        let frags = clip_to_days(18.0, 10.0);
        assert_eq!(frags.len(), 2);
        assert_eq!((frags[0].day, frags[0].start_in_day, frags[0].end_in_day), (1, 18.0, 24.0));
        assert_eq!((frags[1].day, frags[1].start_in_day, frags[1].end_in_day), (2, 0.0, 4.0));
    }

    #[test]
    fn interval_spanning_multiple_days() {
        // 20:00 day 1 + 50 h → 4 h + 24 h + 22 h.
        let frags = clip_to_days(20.0, 50.0);
        assert_eq!(frags.len(), 3);
        assert_eq!(frags.iter().map(|f| f.day).collect::<Vec<_>>(), vec![1, 2, 3]);

        let durations: Vec<f64> = frags.iter().map(|f| f.duration()).collect();
        assert!((durations[0] - 4.0).abs() < 1e-12);
        assert!((durations[1] - 24.0).abs() < 1e-12);
        assert!((durations[2] - 22.0).abs() < 1e-12);
    }

    #[test]
    fn durations_sum_exactly() {
        for (start, duration) in [(0.0, 0.5), (23.75, 0.5), (18.0, 10.0), (3.3, 47.77), (23.999, 10.0)] {
            let frags = clip_to_days(start, duration);
            let total: f64 = frags.iter().map(|f| f.duration()).sum();
            assert!(
                (total - duration).abs() < 1e-9,
                "clip({start}, {duration}) fragments sum to {total}"
            );
        }
    }

    #[test]
    fn zero_duration_yields_one_zero_length_fragment() {
        let frags = clip_to_days(7.25, 0.0);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].start_in_day, frags[0].end_in_day);
        assert_eq!(frags[0].day, 1);
    }

    #[test]
    fn start_exactly_at_midnight() {
        let frags = clip_to_days(24.0, 1.0);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].day, 2);
        assert_eq!(frags[0].start_in_day, 0.0);
    }

    #[test]
    fn end_exactly_at_midnight_stays_single() {
        let frags = clip_to_days(14.0, 10.0);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].end_in_day, 24.0);
    }
}

// ── assign_days ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod assign {
    use super::*;

    #[test]
    fn unsplit_stop_has_no_split_metadata() {
        let stops = vec![stop(StopType::Rest, 8.0, 0.5)];
        let bound = assign_days(&stops);
        assert_eq!(bound.len(), 1);
        assert!(bound[0].split.is_none());
        assert_eq!(bound[0].stop_index, 0);
    }

    #[test]
    fn split_stop_carries_metadata_and_back_reference() {
        let stops = vec![
            stop(StopType::Pickup, 4.0, 1.0),
            stop(StopType::Overnight, 18.0, 10.0),
        ];
        let bound = assign_days(&stops);
        assert_eq!(bound.len(), 3);

        let halves: Vec<_> = bound.iter().filter(|b| b.stop_index == 1).collect();
        assert_eq!(halves.len(), 2);

        let first = halves[0].split.as_ref().unwrap();
        assert_eq!(first.fragment_index, 0);
        assert_eq!(first.fragment_count, 2);
        assert_eq!(first.original_duration_hours, 10.0);

        let second = halves[1].split.as_ref().unwrap();
        assert_eq!(second.fragment_index, 1);

        let total: f64 = halves.iter().map(|b| b.duration_in_day()).sum();
        assert!((total - 10.0).abs() < 1e-9);
    }

    #[test]
    fn sorted_by_day_then_start() {
        let stops = vec![
            stop(StopType::Start, 0.0, 0.0),
            stop(StopType::Pickup, 4.0, 1.0),
            stop(StopType::Overnight, 18.0, 10.0),
            stop(StopType::Dropoff, 30.0, 1.0),
        ];
        let bound = assign_days(&stops);
        for pair in bound.windows(2) {
            assert!(
                pair[0].day < pair[1].day
                    || (pair[0].day == pair[1].day
                        && pair[0].start_in_day <= pair[1].start_in_day)
            );
        }
    }
}

// ── ScheduleSynthesizer ───────────────────────────────────────────────────────

#[cfg(test)]
mod synth {
    use super::*;

    /// Two-day trip whose overnight rest crosses midnight.
    fn crossing_itinerary() -> Vec<Stop> {
        vec![
            stop(StopType::Start, 0.0, 0.0),
            stop(StopType::Pickup, 4.0, 1.0),
            stop(StopType::Overnight, 18.0, 10.0), // ends day 2 at 04:00
            stop(StopType::Dropoff, 30.0, 1.0),    // day 2, 06:00–07:00
        ]
    }

    fn synthesize(stops: &[Stop], cycle_used: f64) -> Vec<DailySchedule> {
        let rules = HosRules::fmcsa();
        let fragments = assign_days(stops);
        ScheduleSynthesizer::new(&rules)
            .synthesize(stops, &fragments, cycle_used)
            .unwrap()
    }

    #[test]
    fn every_day_covers_24_hours() {
        for schedule in synthesize(&crossing_itinerary(), 0.0) {
            assert_covers_day(&schedule);
        }
    }

    #[test]
    fn day_one_timeline() {
        let schedules = synthesize(&crossing_itinerary(), 0.0);
        let day1 = &schedules[0];

        let statuses: Vec<DutyStatus> = day1.segments.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                DutyStatus::Driving,      // 0–4: en route to the shipper
                DutyStatus::OnDuty,       // 4–5: pickup
                DutyStatus::Driving,      // 5–18
                DutyStatus::SleeperBerth, // 18–24: overnight, first half
            ]
        );
        assert!((day1.driving_hours - 17.0).abs() < 1e-9);
        assert!((day1.on_duty_hours - 1.0).abs() < 1e-9);
        assert!((day1.sleeper_hours - 6.0).abs() < 1e-9);
        assert!((day1.off_duty_hours - 0.0).abs() < 1e-9);
    }

    #[test]
    fn carried_rest_opens_the_next_day() {
        let schedules = synthesize(&crossing_itinerary(), 0.0);
        let day2 = &schedules[1];

        let opening = &day2.segments[0];
        assert_eq!(opening.status, DutyStatus::SleeperBerth);
        assert_eq!(opening.start_hour, 0.0);
        assert!((opening.end_hour - 4.0).abs() < 1e-9, "carried rest ends at 04:00");
    }

    #[test]
    fn final_day_ends_off_duty_at_24() {
        let schedules = synthesize(&crossing_itinerary(), 0.0);
        let last_day = schedules.last().unwrap();

        let tail = last_day.segments.last().unwrap();
        assert_eq!(tail.status, DutyStatus::OffDuty);
        assert!((tail.end_hour - 24.0).abs() < 1e-12);
        assert_eq!(tail.remark.as_deref(), Some("Trip complete"));
    }

    #[test]
    fn intermediate_day_tail_is_driving() {
        // Overnight ends at 22:00 on day 1; driving resumes until midnight
        // and the dropoff lands on day 2.
        let stops = vec![
            stop(StopType::Start, 0.0, 0.0),
            stop(StopType::Pickup, 2.0, 1.0),
            stop(StopType::Overnight, 12.0, 10.0), // 12–22 within day 1
            stop(StopType::Dropoff, 26.0, 1.0),    // day 2, 02:00
        ];
        let schedules = synthesize(&stops, 0.0);

        let day1_tail = schedules[0].segments.last().unwrap();
        assert_eq!(day1_tail.status, DutyStatus::Driving);
        assert!((day1_tail.start_hour - 22.0).abs() < 1e-9);
        assert!((day1_tail.end_hour - 24.0).abs() < 1e-9);
        assert_eq!(day1_tail.remark.as_deref(), Some("Driving until end of day"));
    }

    #[test]
    fn uncarried_day_opens_with_clamped_default_rest() {
        // No overnight fragment reaches midnight; day 2 opens with the
        // default sleeper block clamped to the day's first stop at 02:00.
        let stops = vec![
            stop(StopType::Start, 0.0, 0.0),
            stop(StopType::Pickup, 2.0, 1.0),
            stop(StopType::Overnight, 12.0, 10.0),
            stop(StopType::Dropoff, 26.0, 1.0),
        ];
        let schedules = synthesize(&stops, 0.0);

        let opening = &schedules[1].segments[0];
        assert_eq!(opening.status, DutyStatus::SleeperBerth);
        assert!((opening.end_hour - 2.0).abs() < 1e-9);
    }

    #[test]
    fn uncarried_day_opens_with_full_default_rest() {
        // First stop of day 2 is at 12:00 — the default block runs its full
        // 10 hours, then the gap to the stop is driving.
        let stops = vec![
            stop(StopType::Start, 0.0, 0.0),
            stop(StopType::Pickup, 2.0, 1.0),
            stop(StopType::Overnight, 12.0, 10.0),
            stop(StopType::Dropoff, 36.0, 1.0), // day 2, 12:00
        ];
        let schedules = synthesize(&stops, 0.0);
        let day2 = &schedules[1];

        assert_eq!(day2.segments[0].status, DutyStatus::SleeperBerth);
        assert!((day2.segments[0].end_hour - 10.0).abs() < 1e-9);
        assert_eq!(day2.segments[1].status, DutyStatus::Driving);
        assert!((day2.segments[1].end_hour - 12.0).abs() < 1e-9);
    }

    #[test]
    fn late_departure_opens_day_one_off_duty() {
        let stops = vec![
            stop(StopType::Start, 6.0, 0.0),
            stop(StopType::Pickup, 8.0, 1.0),
            stop(StopType::Dropoff, 10.0, 1.0),
        ];
        let schedules = synthesize(&stops, 0.0);
        let day1 = &schedules[0];

        let opening = &day1.segments[0];
        assert_eq!(opening.status, DutyStatus::OffDuty);
        assert!((opening.end_hour - 6.0).abs() < 1e-9);
        assert_eq!(opening.remark.as_deref(), Some("Off duty before trip start"));
        assert_covers_day(day1);
    }

    #[test]
    fn start_marker_emits_no_zero_length_segment() {
        let schedules = synthesize(&crossing_itinerary(), 0.0);
        for schedule in &schedules {
            for segment in &schedule.segments {
                assert!(segment.duration() > 0.0, "zero-length segment on day {}", schedule.day);
            }
        }
    }

    #[test]
    fn cycle_accumulates_across_days() {
        let schedules = synthesize(&crossing_itinerary(), 0.0);
        // Day 1: 17 driving + 1 on duty; day 2: 2 driving + 1 on duty.
        assert!((schedules[0].cycle_used - 18.0).abs() < 1e-9);
        assert!((schedules[1].cycle_used - 21.0).abs() < 1e-9);
        assert!(!schedules[1].requires_34_hour_restart);
    }

    #[test]
    fn cycle_restart_flagged_at_limit() {
        // 65 h already used; a 6-hour on-duty day tips past the 70 h limit.
        let stops = vec![
            stop(StopType::Start, 0.0, 0.0),
            stop(StopType::Pickup, 2.0, 1.0),
            stop(StopType::Dropoff, 5.0, 1.0),
        ];
        let schedules = synthesize(&stops, 65.0);
        let day1 = &schedules[0];

        // 4 h driving + 2 h on duty.
        assert!((day1.driving_hours - 4.0).abs() < 1e-9);
        assert!((day1.on_duty_hours - 2.0).abs() < 1e-9);
        assert!((day1.cycle_used - 71.0).abs() < 1e-9);
        assert!(day1.requires_34_hour_restart);
    }

    #[test]
    fn overlapping_fragments_fail_loudly() {
        let stops = vec![
            stop(StopType::Pickup, 2.0, 2.0), // 2–4
            stop(StopType::Rest, 3.0, 1.0),   // 3–4 overlaps
        ];
        let rules = HosRules::fmcsa();
        let fragments = assign_days(&stops);
        let result = ScheduleSynthesizer::new(&rules).synthesize(&stops, &fragments, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn empty_itinerary_yields_no_schedules() {
        let rules = HosRules::fmcsa();
        let schedules = ScheduleSynthesizer::new(&rules)
            .synthesize(&[], &[], 0.0)
            .unwrap();
        assert!(schedules.is_empty());
    }

    #[test]
    fn synthesis_is_idempotent() {
        let stops = crossing_itinerary();
        assert_eq!(synthesize(&stops, 10.0), synthesize(&stops, 10.0));
    }
}

// ── CycleTracker ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cycle {
    use super::*;

    #[test]
    fn accumulates_driving_and_on_duty() {
        let mut tracker = CycleTracker::new(70.0, 0.0);
        let status = tracker.complete_day(11.0, 2.0);
        assert!((status.cycle_used - 13.0).abs() < 1e-12);
        assert!(!status.requires_restart);

        let status = tracker.complete_day(10.0, 1.5);
        assert!((status.cycle_used - 24.5).abs() < 1e-12);
    }

    #[test]
    fn restart_flag_at_exact_limit() {
        let mut tracker = CycleTracker::new(70.0, 64.0);
        let status = tracker.complete_day(5.0, 1.0);
        assert!((status.cycle_used - 70.0).abs() < 1e-12);
        assert!(status.requires_restart);
    }

    #[test]
    fn sixty_five_plus_six_flags_restart() {
        let mut tracker = CycleTracker::new(70.0, 65.0);
        let status = tracker.complete_day(4.0, 2.0);
        assert!((status.cycle_used - 71.0).abs() < 1e-12);
        assert!(status.requires_restart);
    }

    #[test]
    fn remaining_hours_clamped() {
        let mut tracker = CycleTracker::new(70.0, 69.0);
        assert!((tracker.remaining_hours() - 1.0).abs() < 1e-12);
        tracker.complete_day(8.0, 1.0);
        assert_eq!(tracker.remaining_hours(), 0.0);
    }
}
