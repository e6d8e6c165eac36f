//! Airport code types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `AirportCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::AirportCode;
///
/// let jfk = AirportCode::parse("JFK").unwrap();
/// assert_eq!(jfk.as_str(), "JFK");
///
/// // Lowercase is rejected
/// assert!(AirportCode::parse("jfk").is_err());
///
/// // Wrong length is rejected
/// assert!(AirportCode::parse("JF").is_err());
/// assert!(AirportCode::parse("JFKX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AirportCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        assert!(AirportCode::parse("JFK").is_ok());
        assert!(AirportCode::parse("LAX").is_ok());
        assert!(AirportCode::parse("ORD").is_ok());
        assert!(AirportCode::parse("AAA").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("jfk").is_err());
        assert!(AirportCode::parse("Jfk").is_err());
        assert!(AirportCode::parse("JFk").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("J").is_err());
        assert!(AirportCode::parse("JF").is_err());
        assert!(AirportCode::parse("JFKX").is_err());
        assert!(AirportCode::parse("KENNEDY").is_err());
    }

    #[test]
    fn reject_non_ascii() {
        assert!(AirportCode::parse("J1K").is_err());
        assert!(AirportCode::parse("J-K").is_err());
        assert!(AirportCode::parse("J K").is_err());
        assert!(AirportCode::parse("JÖK").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = AirportCode::parse("JFK").unwrap();
        assert_eq!(code.as_str(), "JFK");
    }

    #[test]
    fn display() {
        let code = AirportCode::parse("LAX").unwrap();
        assert_eq!(format!("{}", code), "LAX");
    }

    #[test]
    fn debug() {
        let code = AirportCode::parse("ORD").unwrap();
        assert_eq!(format!("{:?}", code), "AirportCode(ORD)");
    }

    #[test]
    fn equality() {
        let a = AirportCode::parse("JFK").unwrap();
        let b = AirportCode::parse("JFK").unwrap();
        let c = AirportCode::parse("LAX").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(AirportCode::parse("JFK").unwrap());
        assert!(set.contains(&AirportCode::parse("JFK").unwrap()));
        assert!(!set.contains(&AirportCode::parse("LAX").unwrap()));
    }

    #[test]
    fn serde_roundtrip() {
        let code = AirportCode::parse("JFK").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"JFK\"");
        let back: AirportCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<AirportCode>("\"jfk\"").is_err());
        assert!(serde_json::from_str::<AirportCode>("\"JFKX\"").is_err());
    }
}
