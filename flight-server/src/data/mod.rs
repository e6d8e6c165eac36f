//! Flight data loading.
//!
//! The loading collaborator: reads the JSON data file and hands validated
//! records to the rest of the system.

mod error;
mod loader;

pub use error::DataError;
pub use loader::{FlightData, load_data};
