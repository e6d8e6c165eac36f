//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Flight, Itinerary};

/// Query parameters for itinerary search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Origin airport code.
    pub origin: String,

    /// Destination airport code.
    pub destination: String,

    /// Travel date in YYYY-MM-DD.
    pub date: String,
}

/// A flight segment in a search response.
///
/// Field names follow the upstream feed, so segments serialize the same
/// way they were loaded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResult {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub aircraft: String,

    /// Minutes in the air for this segment.
    pub duration: i64,
}

impl FlightResult {
    /// Build the wire representation of a flight segment.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            airline: flight.airline.clone(),
            origin: flight.origin.to_string(),
            destination: flight.destination.to_string(),
            departure_time: flight.departure_time.to_string(),
            arrival_time: flight.arrival_time.to_string(),
            price: flight.price,
            aircraft: flight.aircraft.clone(),
            duration: flight.duration_minutes,
        }
    }
}

/// An itinerary in a search response.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Flight segments in travel order.
    pub segments: Vec<FlightResult>,

    /// Sum of the segment prices.
    pub total_price: f64,

    /// Minutes from first departure to last arrival.
    pub total_duration_minutes: i64,

    /// Ground minutes before each connection.
    pub layovers: Vec<i64>,
}

impl ItineraryResult {
    /// Build the wire representation of an itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            segments: itinerary
                .segments
                .iter()
                .map(|f| FlightResult::from_flight(f))
                .collect(),
            total_price: itinerary.total_price,
            total_duration_minutes: itinerary.total_duration_minutes,
            layovers: itinerary.layovers.clone(),
        }
    }
}

/// Service banner returned from the root path.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Health report with directory and index counts.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub airports_count: usize,
    pub flights_count: usize,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
