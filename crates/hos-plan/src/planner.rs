//! The `TripPlanner` and its output, `TripPlan`.

use hos_core::{GeoPoint, HosRules, Stop, StopType, TripLeg};
use hos_route::{
    point_along, resolve_route, CityIndex, Geocoder, RouteInfo, RouteProvider, StaticGeocoder,
    StraightLineEstimator,
};
use hos_schedule::{assign_days, DailySchedule, DayBoundStop, ScheduleSynthesizer};
use hos_sim::{ItineraryBuilder, SimulationState};

use crate::{NoopPlanObserver, PlanObserver, PlanResult, TripRequest};

// ── LegSummary ────────────────────────────────────────────────────────────────

/// Per-leg resolution summary carried on the finished plan.
#[derive(Clone, Debug, PartialEq)]
pub struct LegSummary {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration_hours: f64,
    /// `true` when this leg used the straight-line fallback.
    pub estimated: bool,
}

// ── TripPlan ──────────────────────────────────────────────────────────────────

/// Everything a rendering collaborator needs: the ordered stop list with day
/// assignments, the per-day duty schedules, totals, and the route geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct TripPlan {
    pub request: TripRequest,
    pub legs: [LegSummary; 2],

    /// Ordered itinerary, START through DROPOFF.
    pub stops: Vec<Stop>,

    /// Day-bounded stop fragments backing the schedules.
    pub fragments: Vec<DayBoundStop>,

    /// One gap-free 24-hour schedule per calendar day.
    pub schedules: Vec<DailySchedule>,

    pub total_distance_km: f64,
    /// Total drive time across both legs (excludes time parked at stops).
    pub total_duration_hours: f64,

    /// Concatenated leg polyline for map rendering.
    pub geometry: Vec<GeoPoint>,

    /// `true` when any leg came from the straight-line fallback; callers
    /// should present such plans as estimated rather than exact.
    pub degraded: bool,
}

impl TripPlan {
    /// Number of calendar days the trip touches.
    pub fn total_days(&self) -> u32 {
        self.schedules.last().map(|s| s.day).unwrap_or(0)
    }

    /// Rolling cycle total after the final day.
    pub fn final_cycle_used(&self) -> f64 {
        self.schedules
            .last()
            .map(|s| s.cycle_used)
            .unwrap_or(self.request.current_cycle_used)
    }

    /// `true` if any day of the trip trips the cycle-limit flag.
    pub fn requires_restart(&self) -> bool {
        self.schedules.iter().any(|s| s.requires_34_hour_restart)
    }
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

/// Plans trips against a route provider and geocoder.
///
/// # Type parameters
///
/// `P` resolves legs (swap in a live OSRM client without touching the
/// engine); `G` resolves location names.  Both degrade deterministically:
/// a provider failure becomes a straight-line estimate, an unknown name
/// becomes the geocoder's default centroid.
pub struct TripPlanner<P: RouteProvider, G: Geocoder> {
    provider: P,
    geocoder: G,
    rules:    HosRules,
    fallback: StraightLineEstimator,
    cities:   CityIndex,
}

impl TripPlanner<StraightLineEstimator, StaticGeocoder> {
    /// A fully offline planner: built-in city table, straight-line routing.
    ///
    /// Every plan it produces is marked [`TripPlan::degraded`], since all
    /// distances are estimates.
    pub fn offline() -> Self {
        let rules = HosRules::fmcsa();
        let fallback = StraightLineEstimator::new(rules.avg_speed_kmh);
        Self {
            provider: fallback.clone(),
            geocoder: StaticGeocoder::builtin(),
            rules,
            fallback,
            cities: CityIndex::builtin(),
        }
    }
}

impl<P: RouteProvider, G: Geocoder> TripPlanner<P, G> {
    /// Create a planner over `provider` and `geocoder` with the given rules.
    ///
    /// Fails if the rule set itself is invalid; request validation happens
    /// per plan.
    pub fn new(provider: P, geocoder: G, rules: HosRules) -> PlanResult<Self> {
        rules.validate()?;
        let fallback = StraightLineEstimator::new(rules.avg_speed_kmh);
        Ok(Self {
            provider,
            geocoder,
            rules,
            fallback,
            cities: CityIndex::builtin(),
        })
    }

    pub fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Plan one trip.
    pub fn plan(&self, request: &TripRequest) -> PlanResult<TripPlan> {
        self.plan_observed(request, &mut NoopPlanObserver)
    }

    /// Plan one trip with progress callbacks.
    pub fn plan_observed<O: PlanObserver>(
        &self,
        request:  &TripRequest,
        observer: &mut O,
    ) -> PlanResult<TripPlan> {
        request.validate()?;

        // ── ① Geocode ─────────────────────────────────────────────────────
        let current = self.geocoder.geocode_or_default(&request.current_location);
        let pickup = self.geocoder.geocode_or_default(&request.pickup_location);
        let dropoff = self.geocoder.geocode_or_default(&request.dropoff_location);

        for (name, point) in [
            (&request.current_location, current),
            (&request.pickup_location, pickup),
            (&request.dropoff_location, dropoff),
        ] {
            if !point.is_valid() {
                return Err(hos_core::HosError::InvalidInput(format!(
                    "{name} resolved to malformed coordinates {point}"
                ))
                .into());
            }
        }

        // ── ② Route, with deterministic fallback ──────────────────────────
        let to_pickup_info = resolve_route(&self.provider, &self.fallback, current, pickup);
        let to_dropoff_info = resolve_route(&self.provider, &self.fallback, pickup, dropoff);

        let to_pickup = TripLeg::new(
            request.current_location.clone(),
            request.pickup_location.clone(),
            to_pickup_info.distance_km,
            to_pickup_info.duration_hours,
        )?;
        let to_dropoff = TripLeg::new(
            request.pickup_location.clone(),
            request.dropoff_location.clone(),
            to_dropoff_info.distance_km,
            to_dropoff_info.duration_hours,
        )?;
        observer.on_leg_resolved(&to_pickup, to_pickup_info.estimated);
        observer.on_leg_resolved(&to_dropoff, to_dropoff_info.estimated);

        // ── ③ Simulate ────────────────────────────────────────────────────
        let start = SimulationState::fresh(self.rules.trip_start_hour);
        let (mut stops, _final_state) =
            ItineraryBuilder::new(&self.rules).build(&to_pickup, &to_dropoff, start);

        let geometry = join_geometry(&to_pickup_info, &to_dropoff_info);
        let total_distance_km = to_pickup_info.distance_km + to_dropoff_info.distance_km;
        self.label_stops(&mut stops, &geometry, total_distance_km);
        for stop in &stops {
            observer.on_stop(stop);
        }

        // ── ④ Assign days, ⑤ synthesize schedules ─────────────────────────
        let fragments = assign_days(&stops);
        let schedules = ScheduleSynthesizer::new(&self.rules).synthesize(
            &stops,
            &fragments,
            request.current_cycle_used,
        )?;
        for schedule in &schedules {
            observer.on_day(schedule);
        }

        let plan = TripPlan {
            request: request.clone(),
            legs: [
                leg_summary(&to_pickup, to_pickup_info.estimated),
                leg_summary(&to_dropoff, to_dropoff_info.estimated),
            ],
            stops,
            fragments,
            schedules,
            total_distance_km,
            total_duration_hours: to_pickup.duration_hours + to_dropoff.duration_hours,
            geometry,
            degraded: to_pickup_info.estimated || to_dropoff_info.estimated,
        };
        observer.on_plan_complete(&plan);
        Ok(plan)
    }

    // ── Stop labelling ────────────────────────────────────────────────────

    /// Suffix regulation stops with the nearest city along the route, so the
    /// log sheet reads "30-min break after 8.0 h driving, near Amarillo".
    fn label_stops(&self, stops: &mut [Stop], geometry: &[GeoPoint], total_km: f64) {
        if total_km <= 0.0 || geometry.len() < 2 {
            return;
        }
        for stop in stops {
            if !matches!(
                stop.stop_type,
                StopType::Rest | StopType::Fuel | StopType::Overnight
            ) {
                continue;
            }
            let fraction = stop.distance_km / total_km;
            if let Some(point) = point_along(geometry, fraction) {
                if let Some(city) = self.cities.nearest(point) {
                    stop.location = format!("{}, near {city}", stop.location);
                }
            }
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn leg_summary(leg: &TripLeg, estimated: bool) -> LegSummary {
    LegSummary {
        origin:         leg.origin.clone(),
        destination:    leg.destination.clone(),
        distance_km:    leg.distance_km,
        duration_hours: leg.duration_hours,
        estimated,
    }
}

/// Concatenate the two leg polylines, dropping the duplicated pickup point.
fn join_geometry(first: &RouteInfo, second: &RouteInfo) -> Vec<GeoPoint> {
    let mut geometry = first.geometry.clone();
    let skip = match (geometry.last(), second.geometry.first()) {
        (Some(a), Some(b)) if a == b => 1,
        _ => 0,
    };
    geometry.extend(second.geometry.iter().skip(skip).copied());
    geometry
}
