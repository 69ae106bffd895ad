//! Batch planning over independent trips.
//!
//! Each trip is a pure function of its own request, so trips parallelize
//! with no coordination.  Legs *within* one trip stay sequential — each
//! leg's starting clocks are the previous leg's final clocks.

use hos_route::{Geocoder, RouteProvider};

use crate::{PlanResult, TripPlan, TripPlanner, TripRequest};

impl<P: RouteProvider, G: Geocoder> TripPlanner<P, G> {
    /// Plan every request, returning one result per request in input order.
    ///
    /// With the `parallel` Cargo feature, planning runs on Rayon's thread
    /// pool; results are positionally stable either way, so output order is
    /// deterministic.
    pub fn plan_batch(&self, requests: &[TripRequest]) -> Vec<PlanResult<TripPlan>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests.par_iter().map(|request| self.plan(request)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|request| self.plan(request)).collect()
        }
    }
}
