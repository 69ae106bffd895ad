//! Chunked simulation of one leg with regulation trigger checks.

use hos_core::{HosRules, Stop, StopType, TripLeg, EPSILON, HOURS_PER_DAY};

use crate::SimulationState;

/// Simulates driving one leg, emitting regulation-triggered stops.
///
/// The simulator is stateless apart from the rule set it borrows; all
/// per-trip state lives in the [`SimulationState`] value passed through
/// [`simulate`][Self::simulate].
pub struct SegmentSimulator<'a> {
    rules: &'a HosRules,
}

impl<'a> SegmentSimulator<'a> {
    pub fn new(rules: &'a HosRules) -> Self {
        Self { rules }
    }

    /// Drive `leg` to completion from `state`.
    ///
    /// Returns the stops emitted during the leg (in cumulative-hour order)
    /// and the final state to seed the next leg.  The leg always consumes at
    /// least one chunk, and the per-chunk driving times sum to exactly the
    /// leg's duration.
    pub fn simulate(&self, leg: &TripLeg, state: SimulationState) -> (Vec<Stop>, SimulationState) {
        let mut state = state;
        let mut stops = Vec::new();

        let speed_kmh = leg.speed_kmh();
        let mut remaining = leg.duration_hours;

        // A trigger may already be due — duty time added at a pickup can
        // breach the daily window before the wheels turn.
        self.apply_triggers(&mut state, &mut stops);

        loop {
            let dt = self.next_chunk(&state, remaining, speed_kmh);
            state.advance_driving(dt, speed_kmh * dt);
            remaining -= dt;

            self.apply_triggers(&mut state, &mut stops);

            if remaining <= EPSILON {
                break;
            }
        }

        (stops, state)
    }

    // ── Chunk sizing ──────────────────────────────────────────────────────

    /// Length of the next chunk: at most `max_chunk_hours`, clipped to the
    /// leg's remaining time and to the earliest trigger threshold, so no
    /// clock is ever driven past its limit mid-chunk.
    fn next_chunk(&self, state: &SimulationState, remaining: f64, speed_kmh: f64) -> f64 {
        let r = self.rules;

        let mut dt = r.max_chunk_hours.min(remaining);
        dt = dt.min(until(r.break_after_hours - state.driving_since_break));
        dt = dt.min(until(r.max_driving_hours - state.driving_today));
        dt = dt.min(until(r.max_duty_hours - state.duty_today));

        if speed_kmh > 0.0 {
            if let Some(checkpoint) = state.next_fuel_checkpoint_km {
                dt = dt.min(until((checkpoint - state.distance_km) / speed_kmh));
            }
        }

        dt
    }

    // ── Trigger checks ────────────────────────────────────────────────────

    /// Apply the trigger checks in fixed priority order.  More than one may
    /// fire after a single chunk; ties resolve in this order.
    fn apply_triggers(&self, state: &mut SimulationState, stops: &mut Vec<Stop>) {
        let r = self.rules;

        // ① Mandatory break after continuous driving.
        if state.driving_since_break + EPSILON >= r.break_after_hours {
            stops.push(Stop {
                stop_type:      StopType::Rest,
                location:       format!(
                    "30-min break after {:.1} h driving",
                    state.driving_since_break
                ),
                distance_km:    state.distance_km,
                hours:          state.hours,
                duration_hours: r.rest_break_duration_hours,
                clocks:         state.snapshot(),
            });
            state.driving_since_break = 0.0;
            state.duty_today += r.rest_break_duration_hours;
            state.hours += r.rest_break_duration_hours;
        }

        // ② Fuel checkpoint (tracking starts at the pickup).
        if let Some(checkpoint) = state.next_fuel_checkpoint_km {
            if state.distance_km + EPSILON >= checkpoint {
                stops.push(Stop {
                    stop_type:      StopType::Fuel,
                    location:       format!("Fuel stop at {:.0} km", state.distance_km),
                    distance_km:    state.distance_km,
                    hours:          state.hours,
                    duration_hours: r.fuel_stop_duration_hours,
                    clocks:         state.snapshot(),
                });
                state.next_fuel_checkpoint_km = Some(checkpoint + r.fuel_interval_km);
                state.duty_today += r.fuel_stop_duration_hours;
                state.hours += r.fuel_stop_duration_hours;
            }
        }

        // ③ Daily driving limit or duty window exhausted.
        //
        // Stop durations above may push duty_today past the window; driving
        // never does (the chunk is clipped), so this check fires at the
        // first opportunity either way.
        if state.driving_today + EPSILON >= r.max_driving_hours
            || state.duty_today + EPSILON >= r.max_duty_hours
        {
            let day = (state.hours / HOURS_PER_DAY).floor() as u32 + 1;
            stops.push(Stop {
                stop_type:      StopType::Overnight,
                location:       format!("Overnight rest (day {day})"),
                distance_km:    state.distance_km,
                hours:          state.hours,
                duration_hours: r.min_rest_hours,
                clocks:         state.snapshot(),
            });
            state.hours += r.min_rest_hours;
            state.driving_today = 0.0;
            state.duty_today = 0.0;
            state.driving_since_break = 0.0;
        }
    }
}

/// Hours until a threshold, treating an already-crossed (or just-reset)
/// threshold as unconstraining — the trigger check owns that case.
#[inline]
fn until(hours: f64) -> f64 {
    if hours > EPSILON { hours } else { f64::INFINITY }
}
