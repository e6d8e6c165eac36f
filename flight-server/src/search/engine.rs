//! Route search engine.
//!
//! Answers: "how can I fly from this airport to that one on this date?"
//!
//! The search is an exhaustive depth-bounded enumeration over the flight
//! index, not a shortest-path search: every path that satisfies the
//! connection rules is emitted, and ranking happens afterwards. The
//! traversal uses an explicit worklist, so depth is a plain counter and
//! never coupled to call-stack depth.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::domain::{AirportCode, AirportDirectory, Flight, Itinerary};

use super::clock::to_utc;
use super::config::ConnectionRules;
use super::index::FlightIndex;
use super::rank::rank_itineraries;

/// The route search engine.
///
/// Holds the airport directory, the flight index and the connection
/// rules. Built once at startup; all state is read-only afterwards, so
/// one engine serves concurrent queries without locking.
#[derive(Debug)]
pub struct SearchEngine {
    directory: AirportDirectory,
    index: FlightIndex,
    rules: ConnectionRules,
}

/// One worklist frame: the flight just taken and the path so far.
/// `path` always ends with `current`; its length is the search depth.
struct Frame {
    current: Arc<Flight>,
    path: Vec<Arc<Flight>>,
}

impl SearchEngine {
    /// Create a new engine over prebuilt data.
    pub fn new(directory: AirportDirectory, index: FlightIndex, rules: ConnectionRules) -> Self {
        Self {
            directory,
            index,
            rules,
        }
    }

    /// The airport directory the engine was built with.
    pub fn directory(&self) -> &AirportDirectory {
        &self.directory
    }

    /// The flight index the engine was built with.
    pub fn index(&self) -> &FlightIndex {
        &self.index
    }

    /// Find all valid itineraries from `origin` to `destination` whose
    /// first leg departs on `date` (the local calendar date at the
    /// origin, not the UTC date).
    ///
    /// Never fails: unknown codes or absent data produce an empty list.
    /// Results are ordered by stop count, then total duration.
    pub fn find_routes(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        date: NaiveDate,
    ) -> Vec<Itinerary> {
        let mut results = Vec::new();

        // Seeds: departures from the origin on the requested local date.
        let seeds: Vec<&Arc<Flight>> = self
            .index
            .departures_from(&origin)
            .iter()
            .filter(|f| f.departure_time.civil_date() == date)
            .collect();

        // Explicit DFS stack. Frames are pushed in reverse so pop order
        // matches data-feed order, keeping emission deterministic.
        let mut stack: Vec<Frame> = Vec::with_capacity(seeds.len());
        for seed in seeds.into_iter().rev() {
            stack.push(Frame {
                current: Arc::clone(seed),
                path: vec![Arc::clone(seed)],
            });
        }

        let mut explored = 0usize;

        while let Some(frame) = stack.pop() {
            explored += 1;

            // Accept before the depth check: a full-length path that has
            // just reached the target is still a valid itinerary. The
            // branch stops extending either way.
            if frame.current.destination == destination {
                results.push(self.build_itinerary(frame.path));
                continue;
            }

            // Depth ceiling: at most `max_segments` legs per itinerary.
            if frame.path.len() >= self.rules.max_segments {
                continue;
            }

            // Expand through every flight leaving the current airport.
            // There is deliberately no revisit guard: a path may pass
            // through the same airport twice if depth allows.
            let arrival_utc = self.arrival_utc(&frame.current);
            let candidates = self.index.departures_from(&frame.current.destination);
            for next in candidates.iter().rev() {
                if !self.connection_ok(&frame.current, arrival_utc, next) {
                    continue;
                }

                let mut path = frame.path.clone();
                path.push(Arc::clone(next));
                stack.push(Frame {
                    current: Arc::clone(next),
                    path,
                });
            }
        }

        debug!(
            %origin,
            %destination,
            %date,
            explored,
            found = results.len(),
            "route search complete"
        );

        rank_itineraries(&mut results);
        results
    }

    /// Connection validity between consecutive legs.
    fn connection_ok(
        &self,
        current: &Flight,
        current_arrival_utc: DateTime<Utc>,
        next: &Flight,
    ) -> bool {
        let layover = self
            .departure_utc(next)
            .signed_duration_since(current_arrival_utc);

        // Passenger patience bound.
        if layover > self.rules.max_layover() {
            return false;
        }

        // Domestic-to-domestic transfers clear in 45 minutes; anything
        // involving an international leg needs 90. A negative layover,
        // including re-boarding a flight that already departed, fails
        // the minimum.
        let both_domestic = self.is_domestic(current) && self.is_domestic(next);
        layover >= self.rules.min_connection(both_domestic)
    }

    /// Whether a flight's endpoints share a country.
    ///
    /// A leg touching an airport missing from the directory counts as
    /// international, which applies the larger connection buffer.
    fn is_domestic(&self, flight: &Flight) -> bool {
        match (
            self.directory.get(&flight.origin),
            self.directory.get(&flight.destination),
        ) {
            (Some(origin), Some(destination)) => origin.country == destination.country,
            _ => false,
        }
    }

    fn departure_utc(&self, flight: &Flight) -> DateTime<Utc> {
        to_utc(&flight.departure_time, self.directory.get(&flight.origin))
    }

    fn arrival_utc(&self, flight: &Flight) -> DateTime<Utc> {
        to_utc(&flight.arrival_time, self.directory.get(&flight.destination))
    }

    /// Assemble the priced, timed itinerary for an accepted path.
    fn build_itinerary(&self, segments: Vec<Arc<Flight>>) -> Itinerary {
        let total_price = segments.iter().map(|f| f.price).sum();

        let layovers = segments
            .windows(2)
            .map(|pair| {
                let arrival = self.arrival_utc(&pair[0]);
                let departure = self.departure_utc(&pair[1]);
                departure.signed_duration_since(arrival).num_minutes()
            })
            .collect();

        // First departure to last arrival: all flight time plus all
        // layover time, not the sum of segment durations.
        let start = self.departure_utc(&segments[0]);
        let end = self.arrival_utc(&segments[segments.len() - 1]);
        let total_duration_minutes = end.signed_duration_since(start).num_minutes();

        Itinerary {
            segments,
            total_price,
            total_duration_minutes,
            layovers,
        }
    }
}
