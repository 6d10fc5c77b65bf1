//! Web layer for the campus route finder.
//!
//! Provides JSON endpoints for route search, the stop catalog and the
//! intercampus shuttle timetable.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
