//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirections;
use crate::directions::DirectionsBackend;
use crate::finder::{FinderConfig, RouteFinder};
use crate::network::CampusNetwork;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Campus loops and stops
    pub network: Arc<CampusNetwork>,

    /// Cached external directions provider
    pub directions: Arc<CachedDirections<DirectionsBackend>>,

    /// Route finder configuration
    pub config: Arc<FinderConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: CampusNetwork,
        directions: CachedDirections<DirectionsBackend>,
        config: FinderConfig,
    ) -> Self {
        Self {
            network: Arc::new(network),
            directions: Arc::new(directions),
            config: Arc::new(config),
        }
    }

    /// A route finder borrowing this state.
    pub fn finder(&self) -> RouteFinder<'_, CachedDirections<DirectionsBackend>> {
        RouteFinder::new(&self.network, &*self.directions, &self.config)
    }
}
