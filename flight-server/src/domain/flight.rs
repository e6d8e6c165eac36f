//! Flight records and schedule timestamps.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use super::AirportCode;

/// A schedule timestamp as written in the data feed.
///
/// Schedules normally carry zone-naive wall-clock times local to the
/// airport. Some feeds embed an explicit UTC offset instead; both forms
/// are preserved here so the normalizer can treat them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTime {
    /// Wall-clock time with no zone information (the normal case).
    Naive(NaiveDateTime),

    /// Timestamp carrying an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
}

impl ScheduleTime {
    /// The calendar date exactly as written, with no zone conversion.
    ///
    /// Seed selection matches this against the requested travel date:
    /// the comparison is on the local date, not the UTC date.
    pub fn civil_date(&self) -> NaiveDate {
        match self {
            ScheduleTime::Naive(dt) => dt.date(),
            ScheduleTime::Zoned(dt) => dt.date_naive(),
        }
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleTime::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            ScheduleTime::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for ScheduleTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;

        // An explicit offset takes priority; otherwise the timestamp is
        // read as naive wall-clock time.
        if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
            return Ok(ScheduleTime::Zoned(dt));
        }
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M"))
            .map(ScheduleTime::Naive)
            .map_err(serde::de::Error::custom)
    }
}

/// A scheduled flight between two airports.
///
/// `duration_minutes` is derived once at index build time from the
/// UTC-normalized departure and arrival, and is immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    pub origin: AirportCode,
    pub destination: AirportCode,

    /// Departure time, local to the origin airport.
    pub departure_time: ScheduleTime,

    /// Arrival time, local to the destination airport.
    pub arrival_time: ScheduleTime,

    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,

    pub aircraft: String,

    /// Minutes in the air, filled in by the flight index.
    #[serde(default)]
    pub duration_minutes: i64,
}

/// Parse a price given either as a JSON number or a numeric string.
///
/// An unparseable string becomes 0.0 rather than failing the load; the
/// feed is known to contain the occasional junk price.
fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceRepr {
        Num(f64),
        Text(String),
    }

    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Num(n) => Ok(n),
        PriceRepr::Text(s) => Ok(s.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(price = %s, "unparseable price string, defaulting to 0.0");
            0.0
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn deserialize_naive_timestamp() {
        let t: ScheduleTime = serde_json::from_str("\"2024-06-01T08:00:00\"").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(t, ScheduleTime::Naive(expected));
        assert_eq!(t.civil_date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn deserialize_timestamp_without_seconds() {
        let t: ScheduleTime = serde_json::from_str("\"2024-06-01T08:00\"").unwrap();
        assert_eq!(t.to_string(), "2024-06-01T08:00:00");
    }

    #[test]
    fn deserialize_zoned_timestamp() {
        let t: ScheduleTime = serde_json::from_str("\"2024-06-01T08:00:00+02:00\"").unwrap();
        match t {
            ScheduleTime::Zoned(dt) => {
                assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
                assert_eq!(t.civil_date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
            }
            ScheduleTime::Naive(_) => panic!("expected zoned timestamp"),
        }
    }

    #[test]
    fn reject_garbage_timestamp() {
        assert!(serde_json::from_str::<ScheduleTime>("\"yesterday\"").is_err());
    }

    #[test]
    fn display_naive() {
        let t: ScheduleTime = serde_json::from_str("\"2024-06-01T08:30:00\"").unwrap();
        assert_eq!(t.to_string(), "2024-06-01T08:30:00");
    }

    #[test]
    fn deserialize_flight_with_string_price() {
        let json = r#"{
            "flightNumber": "SP100",
            "airline": "SkyPath",
            "origin": "JFK",
            "destination": "LAX",
            "departureTime": "2024-06-01T08:00:00",
            "arrivalTime": "2024-06-01T10:30:00",
            "price": "199.99",
            "aircraft": "Boeing 737"
        }"#;

        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.flight_number, "SP100");
        assert_eq!(flight.price, 199.99);
        assert_eq!(flight.duration_minutes, 0);
    }

    #[test]
    fn deserialize_flight_with_numeric_price() {
        let json = r#"{
            "flightNumber": "SP200",
            "airline": "SkyPath",
            "origin": "ORD",
            "destination": "LAX",
            "departureTime": "2024-06-01T12:00:00",
            "arrivalTime": "2024-06-01T14:00:00",
            "price": 250,
            "aircraft": "A320"
        }"#;

        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.price, 250.0);
    }

    #[test]
    fn junk_price_string_becomes_zero() {
        let json = r#"{
            "flightNumber": "SP300",
            "airline": "SkyPath",
            "origin": "JFK",
            "destination": "ORD",
            "departureTime": "2024-06-01T08:00:00",
            "arrivalTime": "2024-06-01T10:30:00",
            "price": "call us",
            "aircraft": "A320"
        }"#;

        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.price, 0.0);
    }

    #[test]
    fn invalid_airport_code_rejected() {
        let json = r#"{
            "flightNumber": "SP400",
            "airline": "SkyPath",
            "origin": "JFKX",
            "destination": "ORD",
            "departureTime": "2024-06-01T08:00:00",
            "arrivalTime": "2024-06-01T10:30:00",
            "price": 100,
            "aircraft": "A320"
        }"#;

        assert!(serde_json::from_str::<Flight>(json).is_err());
    }
}
