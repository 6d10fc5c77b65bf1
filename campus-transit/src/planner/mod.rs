//! Campus path planning and result ranking.
//!
//! The planner answers: "both ends are campus stops - which loops, or
//! which loop plus one change, or a walk, gets me there?" It works purely
//! on the static network; there are no timetables and no network calls.

mod campus;
mod rank;

pub use campus::{CampusPlanner, MAX_WALK_MILES, NEARBY_MILES, TRANSFER_MINS};
pub use rank::{SortBy, rank_options};
