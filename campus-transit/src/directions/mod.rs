//! External directions provider.
//!
//! Used when either endpoint of a query is off the campus network. Three
//! modes are requested per query (transit, walking, driving) and every
//! itinerary is normalized into a [`RouteOption`](crate::domain::RouteOption).
//!
//! Key characteristics of the provider:
//! - Locations are free text; the provider geocodes them
//! - A 200 response can still carry a failure in its `status` field
//! - Durations arrive as display text ("1 hour 5 mins") plus seconds

mod adapter;
mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use adapter::{DirectionsBackend, DirectionsProvider, fetch_external};
pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::{convert_response, mode_price, step_mode, strip_tags};
pub use error::DirectionsError;
pub use mock::MockDirectionsClient;
pub use types::{
    DirectionsResponse, ExternalMode, Itinerary, Leg, LegStep, NamedPlace, TextValue,
    TransitDetails, TransitLine, Vehicle,
};
