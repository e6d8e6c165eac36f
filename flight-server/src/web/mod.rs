//! Web serving layer.
//!
//! Thin glue over the search engine: request validation, JSON mapping
//! and status codes live here, never in the core.

mod dto;
mod routes;
mod state;

pub use dto::{FlightResult, ItineraryResult, SearchQuery};
pub use routes::{AppError, create_router};
pub use state::AppState;
