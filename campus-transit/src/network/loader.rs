//! JSON catalog files.
//!
//! A catalog file replaces the built-in network at start-up. Its shape
//! mirrors the builder input: loops listing their stops inline, with shared
//! stops repeated under the same id.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CampusNetwork, CampusNetworkBuilder};

/// Errors loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the file failed
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a valid catalog
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog parsed but yielded no usable loops
    #[error("catalog defines no usable loops")]
    Empty,
}

/// A stop as written in a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopSpec {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// A loop as written in a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopSpec {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub color: String,
    pub stops: Vec<StopSpec>,
}

/// Top-level catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub routes: Vec<LoopSpec>,
}

impl CatalogFile {
    /// Build a network from this catalog.
    pub fn into_network(self) -> Result<CampusNetwork, CatalogError> {
        let network = self
            .routes
            .into_iter()
            .fold(CampusNetworkBuilder::new(), |b, spec| b.add_loop(spec))
            .build();

        if network.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(network)
    }
}

impl CampusNetwork {
    /// Load a network from a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Parse a network from catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        file.into_network()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::StopId;

    const TWO_LOOPS: &str = r##"{
        "routes": [
            {
                "id": "gold",
                "name": "Gold Loop",
                "short_name": "G",
                "color": "#CFB991",
                "stops": [
                    {"id": "a", "name": "Alpha", "address": "1 First St", "lat": 40.0, "lng": -86.0},
                    {"id": "b", "name": "Bravo", "address": "2 Second St", "lat": 40.01, "lng": -86.0}
                ]
            },
            {
                "id": "black",
                "name": "Black Loop",
                "short_name": "K",
                "color": "#000000",
                "stops": [
                    {"id": "b", "name": "Bravo", "address": "2 Second St", "lat": 40.01, "lng": -86.0},
                    {"id": "c", "name": "Charlie", "address": "3 Third St", "lat": 40.02, "lng": -86.0}
                ]
            }
        ]
    }"##;

    #[test]
    fn parse_catalog_json() {
        let network = CampusNetwork::from_json(TWO_LOOPS).unwrap();
        assert_eq!(network.loops().len(), 2);
        assert_eq!(network.stop_count(), 3);

        let bravo = network.stop(&StopId::parse("b").unwrap()).unwrap();
        assert_eq!(bravo.routes.len(), 2);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_LOOPS.as_bytes()).unwrap();

        let network = CampusNetwork::load(file.path()).unwrap();
        assert_eq!(network.loops()[0].name, "Gold Loop");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CampusNetwork::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = CampusNetwork::from_json("{\"routes\": [").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn catalog_without_loops_is_rejected() {
        let err = CampusNetwork::from_json("{\"routes\": []}").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));

        let only_empty = r##"{
            "routes": [{"id": "x", "name": "X", "short_name": "X", "color": "#fff", "stops": []}]
        }"##;
        assert!(matches!(
            CampusNetwork::from_json(only_empty).unwrap_err(),
            CatalogError::Empty
        ));
    }

    #[test]
    fn builtin_catalog_roundtrips_through_json() {
        let file = super::super::catalog::purdue_catalog();
        let json = serde_json::to_string(&file).unwrap();
        let network = CampusNetwork::from_json(&json).unwrap();
        assert_eq!(network.stop_count(), 18);
        assert_eq!(network.loops().len(), 3);
    }
}
