//! Domain types for the flight route search engine.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airport;
mod airport_code;
mod flight;
mod itinerary;

pub use airport::{Airport, AirportDirectory};
pub use airport_code::{AirportCode, InvalidAirportCode};
pub use flight::{Flight, ScheduleTime};
pub use itinerary::Itinerary;
