//! Flight data file loading.
//!
//! The data file is a single JSON document carrying the full airport and
//! flight lists. Field names follow the upstream feed (`flightNumber`,
//! `departureTime`, ...). Validation happens during deserialization:
//! airport codes must be well-formed, timestamps must parse, and junk
//! prices degrade to 0.0 rather than failing the load.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Airport, Flight};

use super::error::DataError;

/// Validated contents of the flight data file.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightData {
    pub airports: Vec<Airport>,
    pub flights: Vec<Flight>,
}

/// Load and validate the data file at `path`.
///
/// The search core only ever sees records that passed validation here.
pub fn load_data(path: &Path) -> Result<FlightData, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "airports": [
            {
                "code": "JFK",
                "name": "John F. Kennedy International",
                "city": "New York",
                "country": "USA",
                "timezone": "America/New_York"
            },
            {
                "code": "LAX",
                "name": "Los Angeles International",
                "city": "Los Angeles",
                "country": "USA",
                "timezone": "America/Los_Angeles"
            }
        ],
        "flights": [
            {
                "flightNumber": "SP100",
                "airline": "SkyPath",
                "origin": "JFK",
                "destination": "LAX",
                "departureTime": "2024-06-01T08:00:00",
                "arrivalTime": "2024-06-01T10:30:00",
                "price": "199.99",
                "aircraft": "Boeing 737"
            }
        ]
    }"#;

    fn write_and_load(contents: &str) -> Result<FlightData, DataError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flights.json");
        std::fs::write(&path, contents).unwrap();
        load_data(&path)
    }

    #[test]
    fn load_valid_file() {
        let data = write_and_load(SAMPLE).unwrap();

        assert_eq!(data.airports.len(), 2);
        assert_eq!(data.flights.len(), 1);
        assert_eq!(data.flights[0].flight_number, "SP100");
        // String prices are tolerated.
        assert_eq!(data.flights[0].price, 199.99);
        // Duration is filled in later by the index build.
        assert_eq!(data.flights[0].duration_minutes, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_data(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let result = write_and_load("{ not json");
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }

    #[test]
    fn malformed_airport_code_is_rejected() {
        let bad = SAMPLE.replace("\"JFK\"", "\"JFKX\"");
        let result = write_and_load(&bad);
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }
}
