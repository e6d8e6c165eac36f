//! Itinerary types.

use std::sync::Arc;

use super::Flight;

/// A complete multi-leg itinerary assembled for a single query.
///
/// Segments chain end to end: each flight's destination is the next
/// flight's origin. Itineraries are built per query and discarded with
/// the response; they are never persisted.
#[derive(Debug, Clone)]
pub struct Itinerary {
    /// Flight segments in travel order, between 1 and 3 of them.
    pub segments: Vec<Arc<Flight>>,

    /// Sum of the segment prices.
    pub total_price: f64,

    /// Minutes from the first departure to the last arrival, layovers
    /// included. Not the sum of the segment durations.
    pub total_duration_minutes: i64,

    /// Ground minutes before each connection; one entry per adjacent
    /// segment pair.
    pub layovers: Vec<i64>,
}

impl Itinerary {
    /// Number of connections: segments minus one.
    pub fn stops(&self) -> usize {
        self.segments.len() - 1
    }
}
