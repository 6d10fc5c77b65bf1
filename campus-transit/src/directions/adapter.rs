//! Per-mode fetching of external itineraries.

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::RouteOption;

use super::client::DirectionsClient;
use super::convert::convert_response;
use super::error::DirectionsError;
use super::mock::MockDirectionsClient;
use super::types::{DirectionsResponse, ExternalMode};

/// Source of directions responses.
///
/// This abstraction lets the finder run against the live API, canned
/// fixtures, or a test double.
pub trait DirectionsProvider: Send + Sync {
    /// Fetch itineraries between two free-text locations in one mode.
    fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: ExternalMode,
    ) -> impl Future<Output = Result<DirectionsResponse, DirectionsError>> + Send;
}

impl DirectionsProvider for DirectionsClient {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: ExternalMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.get_directions(origin, destination, mode).await
    }
}

impl DirectionsProvider for MockDirectionsClient {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: ExternalMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        self.get_directions(origin, destination, mode).await
    }
}

/// Live or fixture-backed provider, chosen at start-up.
#[derive(Clone)]
pub enum DirectionsBackend {
    Live(DirectionsClient),
    Mock(MockDirectionsClient),
}

impl DirectionsProvider for DirectionsBackend {
    async fn directions(
        &self,
        origin: &str,
        destination: &str,
        mode: ExternalMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        match self {
            DirectionsBackend::Live(client) => {
                client.get_directions(origin, destination, mode).await
            }
            DirectionsBackend::Mock(client) => {
                client.get_directions(origin, destination, mode).await
            }
        }
    }
}

/// Fetch one mode, giving up after `timeout`.
async fn fetch_mode<P: DirectionsProvider>(
    provider: &P,
    origin: &str,
    destination: &str,
    mode: ExternalMode,
    timeout: Duration,
) -> Result<DirectionsResponse, DirectionsError> {
    tokio::time::timeout(timeout, provider.directions(origin, destination, mode))
        .await
        .map_err(|_| DirectionsError::Timeout(timeout))?
}

/// Fetch transit, walking and driving itineraries concurrently.
///
/// Each mode is isolated: a failure or timeout is logged and contributes no
/// options while the other modes still report. Options are returned in mode
/// order (transit, walking, driving) whatever order the requests finish in.
pub async fn fetch_external<P: DirectionsProvider>(
    provider: &P,
    origin: &str,
    destination: &str,
    timeout: Duration,
) -> Vec<RouteOption> {
    let futures = ExternalMode::ALL.map(|mode| async move {
        let result = fetch_mode(provider, origin, destination, mode, timeout).await;
        (mode, result)
    });

    let results = join_all(futures).await;

    let mut options = Vec::new();
    for (mode, result) in results {
        match result {
            Ok(response) => {
                let converted = convert_response(mode, &response);
                debug!(
                    mode = mode.as_str(),
                    options = converted.len(), "directions fetched"
                );
                options.extend(converted);
            }
            Err(e) => {
                warn!(
                    mode = mode.as_str(),
                    origin,
                    destination,
                    error = %e,
                    "Failed to fetch directions, skipping mode"
                );
            }
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::directions::types::{Itinerary, Leg, TextValue};

    fn ok_response(duration: &str, itineraries: usize) -> DirectionsResponse {
        DirectionsResponse {
            status: "OK".to_string(),
            routes: (0..itineraries)
                .map(|_| Itinerary {
                    summary: None,
                    legs: vec![Leg {
                        duration: TextValue {
                            text: duration.to_string(),
                            value: 0,
                        },
                        ..Default::default()
                    }],
                })
                .collect(),
            error_message: None,
        }
    }

    /// Provider with a scripted outcome per mode and an optional delay.
    struct ScriptedProvider {
        responses: HashMap<ExternalMode, Result<DirectionsResponse, String>>,
        delays: HashMap<ExternalMode, Duration>,
        calls: Mutex<Vec<(String, String, ExternalMode)>>,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                delays: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn ok(mut self, mode: ExternalMode, response: DirectionsResponse) -> Self {
            self.responses.insert(mode, Ok(response));
            self
        }

        fn failing(mut self, mode: ExternalMode) -> Self {
            self.responses.insert(mode, Err("boom".to_string()));
            self
        }

        fn delayed(mut self, mode: ExternalMode, delay: Duration) -> Self {
            self.delays.insert(mode, delay);
            self
        }
    }

    impl DirectionsProvider for ScriptedProvider {
        async fn directions(
            &self,
            origin: &str,
            destination: &str,
            mode: ExternalMode,
        ) -> Result<DirectionsResponse, DirectionsError> {
            self.calls
                .lock()
                .unwrap()
                .push((origin.to_string(), destination.to_string(), mode));

            if let Some(delay) = self.delays.get(&mode) {
                tokio::time::sleep(*delay).await;
            }

            match self.responses.get(&mode) {
                Some(Ok(response)) => Ok(response.clone()),
                Some(Err(message)) => Err(DirectionsError::Api {
                    status: 500,
                    message: message.clone(),
                }),
                None => Err(DirectionsError::NotConfigured(mode.as_str().to_string())),
            }
        }
    }

    fn ids(options: &[RouteOption]) -> Vec<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[tokio::test]
    async fn all_modes_in_order() {
        let provider = ScriptedProvider::new()
            .ok(ExternalMode::Driving, ok_response("58 mins", 1))
            .ok(ExternalMode::Transit, ok_response("1 hour 30 mins", 2))
            .ok(ExternalMode::Walking, ok_response("20 hours 1 min", 1));

        let options = fetch_external(&provider, "A", "B", Duration::from_secs(5)).await;

        assert_eq!(
            ids(&options),
            vec![
                "directions-transit-0",
                "directions-transit-1",
                "directions-walking-0",
                "directions-driving-0",
            ]
        );

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        assert!(calls.iter().all(|(o, d, _)| o == "A" && d == "B"));
    }

    #[tokio::test]
    async fn failing_mode_is_isolated() {
        let provider = ScriptedProvider::new()
            .ok(ExternalMode::Transit, ok_response("1 hour", 1))
            .ok(ExternalMode::Walking, ok_response("3 hours", 1))
            .failing(ExternalMode::Driving);

        let options = fetch_external(&provider, "A", "B", Duration::from_secs(5)).await;
        assert_eq!(
            ids(&options),
            vec!["directions-transit-0", "directions-walking-0"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_mode_times_out() {
        let provider = ScriptedProvider::new()
            .ok(ExternalMode::Transit, ok_response("1 hour", 1))
            .ok(ExternalMode::Walking, ok_response("3 hours", 1))
            .ok(ExternalMode::Driving, ok_response("1 hour", 1))
            .delayed(ExternalMode::Transit, Duration::from_secs(60));

        let options = fetch_external(&provider, "A", "B", Duration::from_secs(5)).await;
        assert_eq!(
            ids(&options),
            vec!["directions-walking-0", "directions-driving-0"]
        );
    }

    #[tokio::test]
    async fn every_mode_failing_yields_nothing() {
        let provider = ScriptedProvider::new();
        let options = fetch_external(&provider, "A", "B", Duration::from_secs(5)).await;
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn mock_backend_serves_fixtures() {
        let backend =
            DirectionsBackend::Mock(MockDirectionsClient::new("data/mock_directions").unwrap());
        let options = fetch_external(
            &backend,
            "Purdue University",
            "Indianapolis International Airport",
            Duration::from_secs(5),
        )
        .await;

        assert!(options.iter().any(|o| o.id == "directions-transit-0"));
        assert!(options.iter().any(|o| o.id == "directions-walking-0"));
        assert!(options.iter().any(|o| o.id == "directions-driving-0"));
    }
}
