//! Incremental construction of a [`CampusNetwork`].

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{LatLng, RouteId, StopId};

use super::loader::LoopSpec;
use super::{CampusNetwork, Loop, Stop};

/// Builder for the campus network.
///
/// Route-sets are derived from loop membership, so every stop in the result
/// is served by at least one loop. Invalid input is skipped with a warning
/// rather than failing the whole build:
/// - loops with an invalid or duplicate id, or no valid stops, are dropped;
/// - stops with an invalid id are dropped;
/// - a stop id seen again keeps its first definition.
#[derive(Debug, Default)]
pub struct CampusNetworkBuilder {
    loops: Vec<Loop>,
    stops: HashMap<StopId, Stop>,
    stop_order: Vec<StopId>,
}

impl CampusNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a loop and its stops.
    pub fn add_loop(mut self, spec: LoopSpec) -> Self {
        let Ok(route_id) = RouteId::parse(&spec.id) else {
            warn!(route = %spec.id, "skipping loop with invalid id");
            return self;
        };

        if self.loops.iter().any(|l| l.id == route_id) {
            warn!(route = %route_id, "skipping duplicate loop");
            return self;
        }

        let mut members = Vec::with_capacity(spec.stops.len());
        let mut new_stops = Vec::new();

        for stop in spec.stops {
            let Ok(stop_id) = StopId::parse(&stop.id) else {
                warn!(route = %route_id, stop = %stop.id, "skipping stop with invalid id");
                continue;
            };

            if let Some(existing) = self.stops.get(&stop_id) {
                if existing.name != stop.name {
                    warn!(
                        stop = %stop_id,
                        kept = %existing.name,
                        ignored = %stop.name,
                        "conflicting stop definition, keeping the first"
                    );
                }
            } else if !new_stops.iter().any(|s: &Stop| s.id == stop_id) {
                new_stops.push(Stop {
                    id: stop_id.clone(),
                    name: stop.name,
                    address: stop.address,
                    location: LatLng::new(stop.lat, stop.lng),
                    routes: Vec::new(),
                });
            }

            members.push(stop_id);
        }

        if members.is_empty() {
            warn!(route = %route_id, "skipping loop with no stops");
            return self;
        }

        for stop in new_stops {
            self.stop_order.push(stop.id.clone());
            self.stops.insert(stop.id.clone(), stop);
        }

        for stop_id in &members {
            if let Some(stop) = self.stops.get_mut(stop_id)
                && !stop.routes.contains(&route_id)
            {
                stop.routes.push(route_id.clone());
            }
        }

        self.loops.push(Loop {
            id: route_id,
            name: spec.name,
            short_name: spec.short_name,
            color: spec.color,
            stops: members,
        });

        self
    }

    /// Build the network.
    pub fn build(self) -> CampusNetwork {
        CampusNetwork {
            loops: self.loops,
            stops: self.stops,
            stop_order: self.stop_order,
        }
    }
}
