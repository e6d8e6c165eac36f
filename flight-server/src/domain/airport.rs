//! Airport records and the static airport directory.

use std::collections::HashMap;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::AirportCode;

/// A single airport. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, unique within the directory.
    pub code: AirportCode,

    /// Full airport name.
    pub name: String,

    /// City served.
    pub city: String,

    /// Country, used to classify flights as domestic or international.
    pub country: String,

    /// IANA timezone identifier, e.g. "America/New_York".
    pub timezone: String,
}

impl Airport {
    /// Resolve the IANA timezone.
    ///
    /// Returns `None` when the identifier is not a known zone. Callers
    /// treat that as a soft failure and fall back to UTC.
    pub fn tz(&self) -> Option<Tz> {
        self.timezone.parse().ok()
    }
}

/// Static lookup table from airport code to airport record.
///
/// Built once at startup and never mutated afterwards, so it can be
/// shared freely between concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    by_code: HashMap<AirportCode, Airport>,
    order: Vec<AirportCode>,
}

impl AirportDirectory {
    /// Build the directory from a list of airports.
    ///
    /// If a code appears more than once, the last record wins, matching
    /// map-building semantics of the data feed. Listing order follows
    /// first appearance.
    pub fn new(airports: Vec<Airport>) -> Self {
        let mut by_code = HashMap::with_capacity(airports.len());
        let mut order = Vec::with_capacity(airports.len());

        for airport in airports {
            if !by_code.contains_key(&airport.code) {
                order.push(airport.code);
            }
            by_code.insert(airport.code, airport);
        }

        Self { by_code, order }
    }

    /// Look up an airport by code.
    pub fn get(&self, code: &AirportCode) -> Option<&Airport> {
        self.by_code.get(code)
    }

    /// Number of airports in the directory.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Iterate over airports in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.order.iter().filter_map(|code| self.by_code.get(code))
    }
}
