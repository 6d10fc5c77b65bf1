//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tracing::warn;

use crate::flights::{CARRIER, OPERATOR, SERVICE_NOTE, flights};
use crate::planner::rank_options;
use crate::shuttle::rides_for_days;

use super::dto::*;
use super::state::AppState;

/// Most days of shuttle timetable served per request.
const MAX_SHUTTLE_DAYS: u32 = 14;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(find_routes))
        .route("/api/stops", get(list_stops))
        .route("/api/stops/resolve", get(resolve_stop))
        .route("/api/shuttle/rides", get(shuttle_rides))
        .route("/api/flights", get(list_flights))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn required(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

/// Find candidate routes between two free-text locations.
async fn find_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Json<RouteSearchResponse>, AppError> {
    required(&req.origin, "origin")?;
    required(&req.destination, "destination")?;

    let (source, options) = state
        .finder()
        .find_routes_with_source(&req.origin, &req.destination)
        .await;
    let options = match req.sort {
        Some(sort) => rank_options(options, sort),
        None => options,
    };

    Ok(Json(RouteSearchResponse {
        origin: req.origin,
        destination: req.destination,
        source,
        options,
    }))
}

/// List every campus stop, in catalog order.
async fn list_stops(State(state): State<AppState>) -> Json<StopListResponse> {
    let stops = state.network.all_stops().into_iter().cloned().collect();
    Json(StopListResponse { stops })
}

/// Resolve free text to a campus stop.
async fn resolve_stop(
    State(state): State<AppState>,
    Query(req): Query<ResolveRequest>,
) -> Result<Json<crate::network::Stop>, AppError> {
    required(&req.q, "q")?;

    state
        .network
        .resolve(&req.q)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("No campus stop matches {:?}", req.q),
        })
}

/// Scheduled intercampus shuttle departures.
async fn shuttle_rides(
    Query(req): Query<ShuttleRidesRequest>,
) -> Result<Json<ShuttleRidesResponse>, AppError> {
    let days = req.days.unwrap_or(1);
    if days == 0 || days > MAX_SHUTTLE_DAYS {
        return Err(AppError::BadRequest {
            message: format!("days must be between 1 and {MAX_SHUTTLE_DAYS}"),
        });
    }

    let start = req.date.unwrap_or_else(|| Local::now().date_naive());
    Ok(Json(ShuttleRidesResponse {
        rides: rides_for_days(start, days),
    }))
}

/// Regional flight schedule for one direction.
async fn list_flights(Query(req): Query<FlightsRequest>) -> Json<FlightsResponse> {
    let direction = req.direction.unwrap_or_default();
    Json(FlightsResponse {
        direction,
        label: direction.label(),
        carrier: CARRIER,
        operator: OPERATOR,
        service_note: SERVICE_NOTE,
        flights: flights(direction),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = %status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
