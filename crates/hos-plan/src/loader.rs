//! CSV request loader.
//!
//! # CSV format
//!
//! One row per trip request:
//!
//! ```csv
//! current_location,pickup_location,dropoff_location,current_cycle_used
//! Chicago,St. Louis,Dallas,12.5
//! Denver,Salt Lake City,Portland,0.0
//! ```
//!
//! Rows are validated on load; a malformed row fails the whole load rather
//! than silently dropping a trip.

use std::io::Read;
use std::path::Path;

use crate::{PlanError, PlanResult, TripRequest};

/// Load trip requests from a CSV file.
pub fn load_requests_csv(path: &Path) -> PlanResult<Vec<TripRequest>> {
    let file = std::fs::File::open(path)?;
    load_requests_reader(file)
}

/// Like [`load_requests_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_requests_reader<R: Read>(reader: R) -> PlanResult<Vec<TripRequest>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut requests = Vec::new();
    for result in csv_reader.deserialize::<TripRequest>() {
        let request = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        request.validate()?;
        requests.push(request);
    }
    Ok(requests)
}
