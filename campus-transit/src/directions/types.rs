//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. Only
//! the fields the adapter reads are modelled; the provider omits fields
//! rather than sending nulls, so almost everything is optional.

use serde::{Deserialize, Serialize};

/// Travel mode requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalMode {
    Transit,
    Walking,
    Driving,
}

impl ExternalMode {
    /// Every mode, in the order results are reported.
    pub const ALL: [ExternalMode; 3] = [
        ExternalMode::Transit,
        ExternalMode::Walking,
        ExternalMode::Driving,
    ];

    /// Value of the `mode` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            ExternalMode::Transit => "transit",
            ExternalMode::Walking => "walking",
            ExternalMode::Driving => "driving",
        }
    }

    /// Capitalized name used as an option label.
    pub const fn label(self) -> &'static str {
        match self {
            ExternalMode::Transit => "Transit",
            ExternalMode::Walking => "Walking",
            ExternalMode::Driving => "Driving",
        }
    }
}

/// Top-level response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// `"OK"` on success; anything else (`"ZERO_RESULTS"`, `"NOT_FOUND"`,
    /// `"REQUEST_DENIED"`, ...) is a failure for this request.
    pub status: String,

    /// Alternative itineraries, best first.
    #[serde(default)]
    pub routes: Vec<Itinerary>,

    /// Explanation accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// One alternative itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Itinerary {
    pub summary: Option<String>,

    /// Legs between waypoints; without waypoints there is exactly one.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Travel between two waypoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leg {
    pub duration: TextValue,
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
    #[serde(default)]
    pub steps: Vec<LegStep>,
}

/// One instruction within a leg.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegStep {
    /// `WALKING`, `DRIVING`, `TRANSIT` or `BICYCLING`.
    pub travel_mode: String,
    pub duration: TextValue,
    pub distance: Option<TextValue>,
    /// Instruction text with inline HTML markup.
    pub html_instructions: Option<String>,
    pub transit_details: Option<TransitDetails>,
}

/// Extra detail on transit steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitDetails {
    pub line: Option<TransitLine>,
    pub departure_stop: Option<NamedPlace>,
    pub arrival_stop: Option<NamedPlace>,
    pub num_stops: Option<u32>,
}

/// Transit line serving a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitLine {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub vehicle: Option<Vehicle>,
}

/// Vehicle operating a transit line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vehicle {
    /// `BUS`, `SUBWAY`, `TRAIN`, `TRAM`, `HEAVY_RAIL`, ...
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub name: Option<String>,
}

/// A named stop or station.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedPlace {
    pub name: String,
}

/// A `{ "text": "5 mins", "value": 300 }` pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    #[serde(default)]
    pub value: i64,
}
