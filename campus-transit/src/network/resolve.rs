//! Free-text location to stop resolution.
//!
//! Matching is deliberately naive: the first stop whose name or address
//! overlaps the input wins, in loop-then-stop declaration order. There is
//! no similarity ranking and no distance tie-break, and callers rely on the
//! resulting tie-breaks staying put.

use tracing::debug;

use super::{CampusNetwork, Stop};

impl CampusNetwork {
    /// Resolve a location string to a known stop.
    ///
    /// 1. Case-insensitive name match, in either direction (the stop name
    ///    contains the input, or the input contains the stop name).
    /// 2. Otherwise, the first stop whose address contains the input.
    ///
    /// Returns `None` when the location is off the campus network.
    pub fn resolve(&self, location: &str) -> Option<&Stop> {
        let query = location.to_lowercase();

        let by_name = self.stop_visits().find(|stop| {
            let name = stop.name.to_lowercase();
            name.contains(&query) || query.contains(&name)
        });

        let found = by_name.or_else(|| {
            self.stop_visits()
                .find(|stop| stop.address.to_lowercase().contains(&query))
        });

        match found {
            Some(stop) => debug!(location, stop = %stop.name, "resolved to campus stop"),
            None => debug!(location, "location is off the campus network"),
        }

        found
    }

    /// Whether a location resolves to a campus stop.
    pub fn is_on_campus(&self, location: &str) -> bool {
        self.resolve(location).is_some()
    }
}
