//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::RouteOption;
use crate::finder::SourceKind;
use crate::flights::{Flight, FlightDirection};
use crate::network::Stop;
use crate::planner::SortBy;
use crate::shuttle::ShuttleRide;

/// Request to find routes between two places.
#[derive(Debug, Deserialize)]
pub struct RouteSearchRequest {
    /// Free-text origin (stop name, address, or anything the provider
    /// can geocode)
    pub origin: String,

    /// Free-text destination
    pub destination: String,

    /// Optional ordering; results are in discovery order when absent
    pub sort: Option<SortBy>,
}

/// Candidate routes for a query.
#[derive(Debug, Serialize)]
pub struct RouteSearchResponse {
    pub origin: String,
    pub destination: String,

    /// Which source produced the options
    pub source: SourceKind,

    /// Candidates; empty means no route was found
    pub options: Vec<RouteOption>,
}

/// Every campus stop.
#[derive(Debug, Serialize)]
pub struct StopListResponse {
    pub stops: Vec<Stop>,
}

/// Request to resolve free text to a campus stop.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub q: String,
}

/// Request for shuttle departures.
#[derive(Debug, Deserialize)]
pub struct ShuttleRidesRequest {
    /// First day (defaults to today)
    pub date: Option<NaiveDate>,

    /// Number of consecutive days (defaults to 1)
    pub days: Option<u32>,
}

/// Scheduled shuttle departures.
#[derive(Debug, Serialize)]
pub struct ShuttleRidesResponse {
    pub rides: Vec<ShuttleRide>,
}

/// Request for regional flights.
#[derive(Debug, Deserialize)]
pub struct FlightsRequest {
    /// `laf-to-ord` (default) or `ord-to-laf`
    pub direction: Option<FlightDirection>,
}

/// Scheduled flights in one direction.
#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    pub direction: FlightDirection,
    pub label: String,
    pub carrier: &'static str,
    pub operator: &'static str,
    pub service_note: &'static str,
    pub flights: Vec<Flight>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
