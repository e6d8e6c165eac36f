//! Flight itinerary search server.
//!
//! A web service that answers: "how can I fly from this airport
//! to that one on this date?" — finding multi-leg itineraries under
//! realistic connection-time rules and ranking them by stop count and
//! total duration.

pub mod data;
pub mod domain;
pub mod search;
pub mod web;
