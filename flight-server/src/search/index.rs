//! Flight adjacency index.
//!
//! Maps each origin airport to the flights departing from it, preserving
//! the order flights appear in the data feed. Per-flight durations are
//! computed here, once, at build time.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::domain::{AirportCode, AirportDirectory, Flight};

use super::clock::to_utc;

/// Adjacency index from origin airport to departing flights.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FlightIndex {
    departures: HashMap<AirportCode, Vec<Arc<Flight>>>,
    flight_count: usize,
}

impl FlightIndex {
    /// Build the index, computing each flight's duration from the
    /// UTC-normalized departure and arrival.
    ///
    /// A non-positive computed duration is a data anomaly: it is logged
    /// and forced to zero, and the flight stays in the index and remains
    /// searchable.
    pub fn build(flights: Vec<Flight>, directory: &AirportDirectory) -> Self {
        let mut departures: HashMap<AirportCode, Vec<Arc<Flight>>> = HashMap::new();
        let flight_count = flights.len();

        for mut flight in flights {
            let dep_utc = to_utc(&flight.departure_time, directory.get(&flight.origin));
            let arr_utc = to_utc(&flight.arrival_time, directory.get(&flight.destination));
            let duration = arr_utc.signed_duration_since(dep_utc).num_minutes();

            flight.duration_minutes = if duration > 0 {
                duration
            } else {
                warn!(
                    flight = %flight.flight_number,
                    origin = %flight.origin,
                    destination = %flight.destination,
                    duration,
                    "non-positive computed flight duration, forcing to 0"
                );
                0
            };

            departures
                .entry(flight.origin)
                .or_default()
                .push(Arc::new(flight));
        }

        Self {
            departures,
            flight_count,
        }
    }

    /// Flights departing from `origin`, in data-feed order.
    ///
    /// An unknown origin yields an empty slice, not an error.
    pub fn departures_from(&self, origin: &AirportCode) -> &[Arc<Flight>] {
        self.departures
            .get(origin)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of indexed flights.
    pub fn flight_count(&self) -> usize {
        self.flight_count
    }

    /// Number of distinct origin airports with departures.
    pub fn origin_count(&self) -> usize {
        self.departures.len()
    }
}
