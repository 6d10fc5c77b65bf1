//! Resolve-then-dispatch route finding.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::directions::{DirectionsProvider, fetch_external};
use crate::domain::RouteOption;
use crate::network::{CampusNetwork, Stop};
use crate::planner::CampusPlanner;

use super::config::FinderConfig;

/// Which source answers a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteSource<'a> {
    /// Both endpoints resolved to campus stops.
    Campus {
        origin: &'a Stop,
        destination: &'a Stop,
    },
    /// At least one endpoint is off the campus network.
    External,
}

impl RouteSource<'_> {
    /// Short name for logs and API responses.
    pub fn kind(&self) -> SourceKind {
        match self {
            RouteSource::Campus { .. } => SourceKind::Campus,
            RouteSource::External => SourceKind::External,
        }
    }
}

/// [`RouteSource`] without the resolved stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Campus,
    External,
}

impl SourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceKind::Campus => "campus",
            SourceKind::External => "external",
        }
    }
}

/// Route finder over a campus network and an external provider.
///
/// Holds no state between queries: the same inputs against the same network
/// and provider give the same candidates.
pub struct RouteFinder<'a, P> {
    network: &'a CampusNetwork,
    provider: &'a P,
    external_timeout: Duration,
}

impl<'a, P: DirectionsProvider> RouteFinder<'a, P> {
    /// Create a new finder.
    pub fn new(network: &'a CampusNetwork, provider: &'a P, config: &FinderConfig) -> Self {
        Self {
            network,
            provider,
            external_timeout: config.external_timeout(),
        }
    }

    /// Decide which source will answer a query.
    ///
    /// Each endpoint is resolved independently.
    pub fn source(&self, origin: &str, destination: &str) -> RouteSource<'a> {
        let from = self.network.resolve(origin);
        let to = self.network.resolve(destination);

        match (from, to) {
            (Some(origin), Some(destination)) => RouteSource::Campus {
                origin,
                destination,
            },
            _ => RouteSource::External,
        }
    }

    /// Find candidate routes between two free-text locations.
    ///
    /// Campus candidates and external candidates are never mixed. Provider
    /// failures are absorbed per mode, so this never fails; an empty list
    /// means no route was found.
    pub async fn find_routes(&self, origin: &str, destination: &str) -> Vec<RouteOption> {
        let (_, options) = self.find_routes_with_source(origin, destination).await;
        options
    }

    /// [`find_routes`](Self::find_routes), also reporting which source
    /// answered. Both endpoints are resolved once.
    pub async fn find_routes_with_source(
        &self,
        origin: &str,
        destination: &str,
    ) -> (SourceKind, Vec<RouteOption>) {
        let source = self.source(origin, destination);

        let options = match source {
            RouteSource::Campus {
                origin: from,
                destination: to,
            } => {
                debug!(from = %from.id, to = %to.id, "planning on campus");
                CampusPlanner::new(self.network).plan(from, to)
            }
            RouteSource::External => {
                debug!(origin, destination, "planning with external directions");
                fetch_external(self.provider, origin, destination, self.external_timeout).await
            }
        };

        info!(
            origin,
            destination, source = source.kind().as_str(), options = options.len(), "routes found"
        );

        (source.kind(), options)
    }
}

#[cfg(test)]
#[path = "route_finder_tests.rs"]
mod tests;
