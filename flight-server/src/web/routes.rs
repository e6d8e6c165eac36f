//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;

use crate::domain::{Airport, AirportCode};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/airports", get(list_airports))
        .route("/api/search", get(search))
        .with_state(state)
}

/// Service banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "SkyPath Backend Service",
    })
}

/// Health check.
///
/// `flights_count` is the number of origin airports with departures,
/// matching what the engine actually indexes.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        airports_count: state.engine.directory().len(),
        flights_count: state.engine.index().origin_count(),
    })
}

/// List all known airports.
async fn list_airports(State(state): State<AppState>) -> Json<Vec<Airport>> {
    Json(state.engine.directory().iter().cloned().collect())
}

/// Search for itineraries between two airports on a date.
///
/// Shape validation happens here; a well-formed but unknown airport code
/// is not an error and simply yields an empty list.
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ItineraryResult>>, AppError> {
    let origin = AirportCode::parse(&query.origin).map_err(|_| AppError::BadRequest {
        message: format!("invalid origin airport code: {}", query.origin),
    })?;
    let destination = AirportCode::parse(&query.destination).map_err(|_| AppError::BadRequest {
        message: format!("invalid destination airport code: {}", query.destination),
    })?;
    let date =
        NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
            message: format!("invalid date (expected YYYY-MM-DD): {}", query.date),
        })?;

    let itineraries = state.engine.find_routes(origin, destination, date);

    Ok(Json(
        itineraries
            .iter()
            .map(ItineraryResult::from_itinerary)
            .collect(),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
