//! The campus loop network.
//!
//! A small static graph: loops are ordered stop sequences, and a stop's
//! route-set (the loops passing through it) is the only connectivity
//! relation. Two loops connect wherever a stop's route-set holds both.
//!
//! The network is built once at start-up, either from the built-in
//! catalog ([`purdue_campus`]) or a JSON file ([`CampusNetwork::load`]), and
//! is read-only afterwards.

mod builder;
mod catalog;
mod loader;
mod resolve;

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{LatLng, RouteId, StopId};

pub use builder::CampusNetworkBuilder;
pub use catalog::purdue_campus;
pub use loader::{CatalogError, CatalogFile, LoopSpec, StopSpec};

/// A physical boarding point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub address: String,
    #[serde(flatten)]
    pub location: LatLng,
    /// Loops serving this stop, in loop-declaration order. Never empty.
    pub routes: Vec<RouteId>,
}

impl Stop {
    /// Whether `route` serves this stop.
    pub fn is_served_by(&self, route: &RouteId) -> bool {
        self.routes.contains(route)
    }

    /// First loop serving this stop that also serves `other`.
    pub fn first_shared_route(&self, other: &Stop) -> Option<&RouteId> {
        self.routes.iter().find(|r| other.is_served_by(r))
    }
}

/// A fixed, cyclic campus loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loop {
    pub id: RouteId,
    pub name: String,
    pub short_name: String,
    pub color: String,
    /// Stops in service order. Never empty.
    pub stops: Vec<StopId>,
}

/// The campus graph: loops plus the stops they share.
#[derive(Debug, Clone, Default)]
pub struct CampusNetwork {
    loops: Vec<Loop>,
    stops: HashMap<StopId, Stop>,
    /// Stop ids in first-appearance order across loop declarations.
    stop_order: Vec<StopId>,
}

impl CampusNetwork {
    /// All loops in declaration order.
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Look up a loop by id.
    pub fn get_loop(&self, id: &RouteId) -> Option<&Loop> {
        self.loops.iter().find(|l| &l.id == id)
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    /// Stops of a loop, in service order.
    pub fn stops_on<'a>(&'a self, route: &'a Loop) -> impl Iterator<Item = &'a Stop> + 'a {
        route.stops.iter().filter_map(|id| self.stops.get(id))
    }

    /// Every stop visit, loop by loop. Shared stops appear once per loop.
    pub fn stop_visits(&self) -> impl Iterator<Item = &Stop> + '_ {
        self.loops.iter().flat_map(|l| self.stops_on(l))
    }

    /// The stop catalog, deduplicated by id, in first-appearance order.
    pub fn all_stops(&self) -> Vec<&Stop> {
        self.stop_order
            .iter()
            .filter_map(|id| self.stops.get(id))
            .collect()
    }

    /// Number of distinct stops.
    pub fn stop_count(&self) -> usize {
        self.stop_order.len()
    }

    /// Returns true if the network has no loops.
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_id(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn route_id(s: &str) -> RouteId {
        RouteId::parse(s).unwrap()
    }

    #[test]
    fn all_stops_deduplicated_in_declaration_order() {
        let network = purdue_campus();
        let ids: Vec<&str> = network.all_stops().iter().map(|s| s.id.as_str()).collect();

        let expected: Vec<String> = (1..=18).map(|n| n.to_string()).collect();
        assert_eq!(ids, expected);
        assert_eq!(network.stop_count(), 18);
    }

    #[test]
    fn shared_stops_carry_both_routes() {
        let network = purdue_campus();

        let daniels = network.stop(&stop_id("3")).unwrap();
        assert_eq!(
            daniels.routes,
            vec![route_id("discovery-park"), route_id("purdue-mall")]
        );

        let pmu = network.stop(&stop_id("9")).unwrap();
        assert_eq!(
            pmu.routes,
            vec![route_id("purdue-mall"), route_id("ross-ade")]
        );
    }

    #[test]
    fn every_stop_has_a_route() {
        let network = purdue_campus();
        for stop in network.all_stops() {
            assert!(!stop.routes.is_empty(), "{} has no routes", stop.name);
        }
    }

    #[test]
    fn stop_visits_repeat_shared_stops() {
        let network = purdue_campus();
        let visits = network.stop_visits().count();
        let declared: usize = network.loops().iter().map(|l| l.stops.len()).sum();
        assert_eq!(visits, declared);
        assert!(visits > network.stop_count());
    }

    #[test]
    fn first_shared_route_follows_origin_order() {
        let network = purdue_campus();
        let pmu = network.stop(&stop_id("9")).unwrap();
        let armstrong = network.stop(&stop_id("7")).unwrap();
        let lynn = network.stop(&stop_id("1")).unwrap();

        assert_eq!(
            pmu.first_shared_route(armstrong),
            Some(&route_id("purdue-mall"))
        );
        assert_eq!(pmu.first_shared_route(lynn), None);
    }

    #[test]
    fn loop_lookup() {
        let network = purdue_campus();
        let ross_ade = network.get_loop(&route_id("ross-ade")).unwrap();
        assert_eq!(ross_ade.short_name, "R");
        assert_eq!(network.stops_on(ross_ade).count(), 8);
        assert!(network.get_loop(&route_id("gold-loop")).is_none());
    }
}
