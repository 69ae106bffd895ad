//! Concatenates leg simulations into one bracketed stop itinerary.

use hos_core::{HosRules, Stop, StopType, TripLeg};

use crate::{SegmentSimulator, SimulationState};

/// Builds the full trip itinerary:
///
/// ```text
/// START → (leg to pickup) → PICKUP → (leg to dropoff) → DROPOFF
/// ```
///
/// The pickup and dropoff each add their configured duration to the duty
/// clocks without driving.  Fuel tracking begins at the pickup: the first
/// checkpoint sits one fuel interval beyond the pickup's odometer reading.
///
/// Clock state is threaded across the pickup boundary, so a long deadhead
/// leg legitimately eats into the duty window available after loading.
pub struct ItineraryBuilder<'a> {
    rules: &'a HosRules,
}

impl<'a> ItineraryBuilder<'a> {
    pub fn new(rules: &'a HosRules) -> Self {
        Self { rules }
    }

    /// Simulate both legs and return the ordered itinerary plus the final
    /// clock state.
    ///
    /// Cumulative distance and hours are exactly additive across legs, and
    /// stop order by cumulative hours is total.
    pub fn build(
        &self,
        to_pickup:  &TripLeg,
        to_dropoff: &TripLeg,
        start:      SimulationState,
    ) -> (Vec<Stop>, SimulationState) {
        let r = self.rules;
        let simulator = SegmentSimulator::new(r);

        let mut stops = vec![Stop {
            stop_type:      StopType::Start,
            location:       to_pickup.origin.clone(),
            distance_km:    start.distance_km,
            hours:          start.hours,
            duration_hours: 0.0,
            clocks:         start.snapshot(),
        }];

        // ── Leg 1: deadhead to the shipper ────────────────────────────────
        let (leg_stops, mut state) = simulator.simulate(to_pickup, start);
        stops.extend(leg_stops);

        // ── Pickup: one hour on duty, no driving ──────────────────────────
        stops.push(Stop {
            stop_type:      StopType::Pickup,
            location:       to_pickup.destination.clone(),
            distance_km:    state.distance_km,
            hours:          state.hours,
            duration_hours: r.pickup_duration_hours,
            clocks:         state.snapshot(),
        });
        state.duty_today += r.pickup_duration_hours;
        state.hours += r.pickup_duration_hours;
        state.begin_fuel_tracking(r.fuel_interval_km);

        // ── Leg 2: loaded run to the consignee ────────────────────────────
        let (leg_stops, mut state) = simulator.simulate(to_dropoff, state);
        stops.extend(leg_stops);

        // ── Dropoff: one hour on duty, trip ends ──────────────────────────
        stops.push(Stop {
            stop_type:      StopType::Dropoff,
            location:       to_dropoff.destination.clone(),
            distance_km:    state.distance_km,
            hours:          state.hours,
            duration_hours: r.dropoff_duration_hours,
            clocks:         state.snapshot(),
        });
        state.duty_today += r.dropoff_duration_hours;
        state.hours += r.dropoff_duration_hours;

        debug_assert!(
            stops.windows(2).all(|w| w[0].hours <= w[1].hours),
            "itinerary must be ordered by cumulative hours"
        );

        (stops, state)
    }
}
