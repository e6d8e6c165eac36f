//! Connection rules for the route explorer.

use chrono::Duration;

/// Connection-time rules applied between consecutive flights.
#[derive(Debug, Clone)]
pub struct ConnectionRules {
    /// Minimum connection time when both legs are domestic (minutes).
    pub min_domestic_mins: i64,

    /// Minimum connection time when either leg is international
    /// (minutes). Customs and security need the larger buffer.
    pub min_international_mins: i64,

    /// Maximum acceptable layover (minutes).
    /// Connections longer than this are rejected.
    pub max_layover_mins: i64,

    /// Maximum number of flight segments per itinerary.
    pub max_segments: usize,
}

impl ConnectionRules {
    /// Create new rules with the given parameters.
    pub fn new(
        min_domestic_mins: i64,
        min_international_mins: i64,
        max_layover_mins: i64,
        max_segments: usize,
    ) -> Self {
        Self {
            min_domestic_mins,
            min_international_mins,
            max_layover_mins,
            max_segments,
        }
    }

    /// Returns the minimum connection time for a transfer.
    pub fn min_connection(&self, both_domestic: bool) -> Duration {
        if both_domestic {
            Duration::minutes(self.min_domestic_mins)
        } else {
            Duration::minutes(self.min_international_mins)
        }
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }
}

impl Default for ConnectionRules {
    fn default() -> Self {
        Self {
            min_domestic_mins: 45,
            min_international_mins: 90,
            max_layover_mins: 360, // 6 hours
            max_segments: 3,       // at most 2 connections
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = ConnectionRules::default();

        assert_eq!(rules.min_domestic_mins, 45);
        assert_eq!(rules.min_international_mins, 90);
        assert_eq!(rules.max_layover_mins, 360);
        assert_eq!(rules.max_segments, 3);
    }

    #[test]
    fn duration_methods() {
        let rules = ConnectionRules::default();

        assert_eq!(rules.min_connection(true), Duration::minutes(45));
        assert_eq!(rules.min_connection(false), Duration::minutes(90));
        assert_eq!(rules.max_layover(), Duration::minutes(360));
    }

    #[test]
    fn custom_rules() {
        let rules = ConnectionRules::new(30, 60, 240, 2);

        assert_eq!(rules.min_domestic_mins, 30);
        assert_eq!(rules.min_international_mins, 60);
        assert_eq!(rules.max_layover_mins, 240);
        assert_eq!(rules.max_segments, 2);
    }
}
