//! Mock directions client for running without an API key.
//!
//! Loads one canned response per travel mode from JSON files and serves it
//! for any pair of endpoints.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::client::check_status;
use super::error::DirectionsError;
use super::types::{DirectionsResponse, ExternalMode};

/// Mock client that serves directions from JSON files.
///
/// The fixtures are fixed once loaded; clones share them.
#[derive(Clone)]
pub struct MockDirectionsClient {
    responses: Arc<HashMap<ExternalMode, DirectionsResponse>>,
}

impl MockDirectionsClient {
    /// Create a mock client by loading fixtures from a directory.
    ///
    /// Expects files named `{mode}.json` (`transit.json`, `walking.json`,
    /// `driving.json`). Missing modes are allowed; requesting one fails like
    /// a provider error.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        for mode in ExternalMode::ALL {
            let path = data_dir.join(format!("{}.json", mode.as_str()));
            if !path.is_file() {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| {
                DirectionsError::NotConfigured(format!("Failed to read {:?}: {}", path, e))
            })?;

            let response: DirectionsResponse =
                serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            responses.insert(mode, response);
        }

        if responses.is_empty() {
            return Err(DirectionsError::NotConfigured(format!(
                "No mock directions files found in {:?}",
                data_dir
            )));
        }

        Ok(Self::from_responses(responses))
    }

    /// Create a mock client from in-memory responses.
    pub fn from_responses(responses: HashMap<ExternalMode, DirectionsResponse>) -> Self {
        Self {
            responses: Arc::new(responses),
        }
    }

    /// Serve the canned response for `mode`.
    ///
    /// Mimics `DirectionsClient::get_directions`; the endpoints are ignored.
    pub async fn get_directions(
        &self,
        _origin: &str,
        _destination: &str,
        mode: ExternalMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let response = self
            .responses
            .get(&mode)
            .cloned()
            .ok_or_else(|| DirectionsError::Api {
                status: 404,
                message: format!("No mock data for mode {}", mode.as_str()),
            })?;

        check_status(response)
    }

    /// Modes with a loaded fixture.
    pub fn modes(&self) -> Vec<ExternalMode> {
        ExternalMode::ALL
            .into_iter()
            .filter(|m| self.responses.contains_key(m))
            .collect()
    }
}
