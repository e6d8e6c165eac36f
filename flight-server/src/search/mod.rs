//! Flight route search.
//!
//! This module implements the core search that answers: "how can I get
//! from this airport to that one on this date?"
//!
//! The search enumerates every itinerary of up to three legs that
//! satisfies the connection-time rules, then ranks the results by stop
//! count and total duration. All times are normalized to UTC through the
//! airports' IANA timezones before any arithmetic.

mod clock;
mod config;
mod engine;
mod index;
mod rank;


pub use clock::to_utc;
pub use config::ConnectionRules;
pub use engine::SearchEngine;
pub use index::FlightIndex;
pub use rank::rank_itineraries;
