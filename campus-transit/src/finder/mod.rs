//! Route aggregation.
//!
//! The finder is the single entry point for "how do I get from A to B":
//! it resolves both endpoints against the campus network and then asks
//! exactly one source for candidates. Campus stops on both ends go to the
//! campus planner; anything else goes to the external provider.

mod config;
mod route_finder;

pub use config::FinderConfig;
pub use route_finder::{RouteFinder, RouteSource, SourceKind};
