//! Ordering of candidate options for display.
//!
//! The finder returns candidates in discovery order; presentation layers
//! pick one of these orderings. Sorts are stable, so ties keep discovery
//! order.

use serde::Deserialize;

use crate::domain::RouteOption;

/// Preferred ordering of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Shortest total duration first.
    #[default]
    Fastest,
    /// Lowest price bound first.
    Cheapest,
    /// Fewest transfers first.
    Convenient,
}

/// Duration key; options with an unreadable duration go last.
fn minutes_key(option: &RouteOption) -> u32 {
    option.duration_minutes().unwrap_or(u32::MAX)
}

/// Rank options by preference.
///
/// - `Fastest`: duration, then transfers
/// - `Cheapest`: lowest price bound, then duration
/// - `Convenient`: transfers, then duration
pub fn rank_options(mut options: Vec<RouteOption>, sort: SortBy) -> Vec<RouteOption> {
    match sort {
        SortBy::Fastest => options.sort_by_key(|o| (minutes_key(o), o.transfers)),
        SortBy::Cheapest => options.sort_by_key(|o| (o.price.low_cents(), minutes_key(o))),
        SortBy::Convenient => options.sort_by_key(|o| (o.transfers, minutes_key(o))),
    }

    options
}
