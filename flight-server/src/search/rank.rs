//! Itinerary ranking for search results.

use crate::domain::Itinerary;

/// Order itineraries by stop count, then total duration, both ascending.
///
/// The sort is stable, so ties keep their emission order. Emission order
/// follows index order, which follows data-feed order, so identical
/// inputs always rank identically.
pub fn rank_itineraries(itineraries: &mut [Itinerary]) {
    itineraries.sort_by_key(|i| (i.stops(), i.total_duration_minutes));
}
