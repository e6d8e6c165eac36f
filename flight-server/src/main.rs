use std::net::SocketAddr;
use std::path::PathBuf;

use flight_server::data::load_data;
use flight_server::domain::AirportDirectory;
use flight_server::search::{ConnectionRules, FlightIndex, SearchEngine};
use flight_server::web::{AppState, create_router};
use tracing::info;

/// Data file used when FLIGHT_DATA is not set.
const DEFAULT_DATA_PATH: &str = "flights.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data_path = PathBuf::from(
        std::env::var("FLIGHT_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
    );

    // Entirely absent input data is fatal here; the search core itself
    // never fails a query.
    let data = match load_data(&data_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load flight data: {e}");
            std::process::exit(1);
        }
    };

    let directory = AirportDirectory::new(data.airports);
    let index = FlightIndex::build(data.flights, &directory);
    info!(
        airports = directory.len(),
        flights = index.flight_count(),
        "search engine initialized"
    );

    let engine = SearchEngine::new(directory, index, ConnectionRules::default());
    let state = AppState::new(engine);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    println!("SkyPath backend listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health       - Health check");
    println!("  GET /api/airports - List airports");
    println!("  GET /api/search   - Search itineraries");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
