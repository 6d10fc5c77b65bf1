//! Route options between two campus stops.
//!
//! Four independent cases are tried in order and every hit is kept:
//! same stop (which short-circuits the rest), a direct ride on a shared
//! loop, a ride with one transfer, and a walk for short distances.
//! Ranking is left to the caller.

use tracing::debug;

use crate::domain::{
    Badge, Pace, Price, RouteOption, Step, TravelMode, distance_miles, estimate_duration,
    estimate_minutes, format_minutes,
};
use crate::network::{CampusNetwork, Loop, Stop};

/// Fixed allowance for changing loops, in minutes.
pub const TRANSFER_MINS: u32 = 5;

/// Walks are offered below this straight-line distance (miles).
pub const MAX_WALK_MILES: f64 = 1.0;

/// Walks below this distance (miles) are badged as nearby.
pub const NEARBY_MILES: f64 = 0.5;

/// Glyph for the "already there" step.
const ARRIVED_ICON: &str = "✅";

/// Where a one-transfer trip changes loops.
struct TransferPoint<'a> {
    stop: &'a Stop,
    first: &'a Loop,
    second: &'a Loop,
}

/// Planner over the static campus network.
pub struct CampusPlanner<'a> {
    network: &'a CampusNetwork,
}

impl<'a> CampusPlanner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a CampusNetwork) -> Self {
        Self { network }
    }

    /// Candidate options from `origin` to `destination`.
    pub fn plan(&self, origin: &Stop, destination: &Stop) -> Vec<RouteOption> {
        if origin.id == destination.id {
            return vec![already_there(origin, destination)];
        }

        let mut options = Vec::new();

        if let Some(direct) = self.direct(origin, destination) {
            options.push(direct);
        }

        if let Some(transfer) = self.one_transfer(origin, destination) {
            options.push(transfer);
        }

        if let Some(walk) = walk(origin, destination) {
            options.push(walk);
        }

        debug!(
            origin = %origin.name,
            destination = %destination.name,
            options = options.len(),
            "campus planning complete"
        );

        options
    }

    /// A single ride on the first loop serving both stops.
    ///
    /// The duration is estimated from the straight-line distance between
    /// the two stops, not the stop-by-stop path around the loop.
    fn direct(&self, origin: &Stop, destination: &Stop) -> Option<RouteOption> {
        let route_id = origin.first_shared_route(destination)?;
        let route = self.network.get_loop(route_id)?;

        let miles = distance_miles(origin.location, destination.location);
        let duration = estimate_duration(miles, Pace::Bus);

        Some(RouteOption {
            id: format!("direct-{}", route.id),
            label: route.name.clone(),
            duration: duration.clone(),
            price: Price::Free,
            transfers: 0,
            modes: vec![TravelMode::Bus.label().to_string()],
            badge: Some(Badge::Direct),
            steps: vec![
                Step::new(
                    TravelMode::Bus,
                    route.name.clone(),
                    duration,
                    origin.name.clone(),
                    destination.name.clone(),
                )
                .with_distance(miles),
            ],
        })
    }

    /// First stop on any origin loop (other than the origin) that shares a
    /// loop with the destination.
    fn find_transfer(&self, origin: &Stop, destination: &Stop) -> Option<TransferPoint<'a>> {
        for route_id in &origin.routes {
            let Some(first) = self.network.get_loop(route_id) else {
                continue;
            };

            for stop in self.network.stops_on(first) {
                if stop.id == origin.id {
                    continue;
                }

                let Some(second_id) = stop.first_shared_route(destination) else {
                    continue;
                };

                if let Some(second) = self.network.get_loop(second_id) {
                    return Some(TransferPoint {
                        stop,
                        first,
                        second,
                    });
                }
            }
        }

        None
    }

    /// Two rides joined by a fixed transfer allowance.
    ///
    /// Tried even when a direct ride exists, so both can be offered.
    fn one_transfer(&self, origin: &Stop, destination: &Stop) -> Option<RouteOption> {
        let TransferPoint {
            stop: via,
            first,
            second,
        } = self.find_transfer(origin, destination)?;

        let miles1 = distance_miles(origin.location, via.location);
        let miles2 = distance_miles(via.location, destination.location);
        let mins1 = estimate_minutes(miles1, Pace::Bus);
        let mins2 = estimate_minutes(miles2, Pace::Bus);
        let total = mins1 + mins2 + TRANSFER_MINS;

        Some(RouteOption {
            id: format!("transfer-{}-{}", first.id, second.id),
            label: format!("{} → {}", first.short_name, second.short_name),
            duration: format_minutes(total),
            price: Price::Free,
            transfers: 1,
            modes: vec![TravelMode::Bus.label().to_string()],
            badge: None,
            steps: vec![
                Step::new(
                    TravelMode::Bus,
                    first.name.clone(),
                    format_minutes(mins1),
                    origin.name.clone(),
                    via.name.clone(),
                )
                .with_distance(miles1),
                Step::new(
                    TravelMode::Transfer,
                    "Transfer",
                    format_minutes(TRANSFER_MINS),
                    via.name.clone(),
                    via.name.clone(),
                ),
                Step::new(
                    TravelMode::Bus,
                    second.name.clone(),
                    format_minutes(mins2),
                    via.name.clone(),
                    destination.name.clone(),
                )
                .with_distance(miles2),
            ],
        })
    }
}

fn already_there(origin: &Stop, destination: &Stop) -> RouteOption {
    RouteOption {
        id: "same-location".to_string(),
        label: TravelMode::Walk.label().to_string(),
        duration: format_minutes(0),
        price: Price::Free,
        transfers: 0,
        modes: vec![TravelMode::Walk.label().to_string()],
        badge: Some(Badge::AlreadyThere),
        steps: vec![
            Step::new(
                TravelMode::Walk,
                "Already at destination",
                format_minutes(0),
                origin.name.clone(),
                destination.name.clone(),
            )
            .with_icon(ARRIVED_ICON),
        ],
    }
}

/// Walks are offered strictly below [`MAX_WALK_MILES`].
fn walkable(miles: f64) -> bool {
    miles < MAX_WALK_MILES
}

/// Nearby strictly below [`NEARBY_MILES`], otherwise no badge.
fn walk_badge(miles: f64) -> Option<Badge> {
    (miles < NEARBY_MILES).then_some(Badge::Nearby)
}

fn walk(origin: &Stop, destination: &Stop) -> Option<RouteOption> {
    let miles = distance_miles(origin.location, destination.location);
    if !walkable(miles) {
        return None;
    }

    let duration = estimate_duration(miles, Pace::Walk);
    let label = TravelMode::Walk.label();

    Some(RouteOption {
        id: "walk".to_string(),
        label: label.to_string(),
        duration: duration.clone(),
        price: Price::Free,
        transfers: 0,
        modes: vec![label.to_string()],
        badge: walk_badge(miles),
        steps: vec![
            Step::new(
                TravelMode::Walk,
                label,
                duration,
                origin.name.clone(),
                destination.name.clone(),
            )
            .with_distance(miles),
        ],
    })
}
