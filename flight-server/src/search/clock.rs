//! Wall-clock to UTC normalization.
//!
//! Schedule times are written as local wall-clock times at an airport.
//! All cross-airport arithmetic (layovers, durations) happens on the
//! absolute UTC instants produced here.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::domain::{Airport, ScheduleTime};

/// Convert a schedule time at an airport into an absolute UTC instant.
///
/// When the airport is unknown, or its timezone id does not resolve, the
/// naive timestamp is taken as already UTC. That masks a data-quality
/// defect instead of failing the query; the quirk is deliberate and the
/// affected flights stay searchable.
pub fn to_utc(time: &ScheduleTime, airport: Option<&Airport>) -> DateTime<Utc> {
    match time {
        // An explicit offset overrides the airport zone entirely.
        ScheduleTime::Zoned(dt) => dt.with_timezone(&Utc),
        ScheduleTime::Naive(naive) => match airport.and_then(Airport::tz) {
            Some(tz) => localize(*naive, tz),
            None => Utc.from_utc_datetime(naive),
        },
    }
}

/// Interpret `naive` as wall-clock time in `tz`, DST included.
///
/// Ambiguous times (clocks rolled back) take the earlier instant. Times
/// skipped by a spring-forward gap are read with the post-gap offset,
/// which is the earliest instant they could denote.
fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Inside a DST gap: resolve one hour later, where the local
            // time exists again, then shift the instant back.
            let shifted = naive + Duration::hours(1);
            let resolved = match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) => dt.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
                LocalResult::None => Utc.from_utc_datetime(&shifted),
            };
            resolved - Duration::hours(1)
        }
    }
}
