//! Domain types for the campus route finder.
//!
//! Identifiers are validated at construction time; route options are plain
//! values built fresh for every query and handed to the caller.

pub mod estimate;
mod geo;
mod ids;
mod option;

pub use estimate::{
    Pace, estimate_duration, estimate_minutes, format_minutes, parse_duration_text,
};
pub use geo::{EARTH_RADIUS_MILES, LatLng, distance_miles};
pub use ids::{InvalidId, RouteId, StopId};
pub use option::{Badge, Price, RouteOption, Step, TravelMode};
