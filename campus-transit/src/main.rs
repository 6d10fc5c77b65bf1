use std::net::SocketAddr;

use campus_transit::cache::{CacheConfig, CachedDirections};
use campus_transit::directions::{
    DirectionsBackend, DirectionsClient, DirectionsConfig, MockDirectionsClient,
};
use campus_transit::finder::FinderConfig;
use campus_transit::network::{CampusNetwork, purdue_campus};
use campus_transit::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Campus network: a catalog file if given, otherwise the built-in loops
    let network = match std::env::var("CAMPUS_CATALOG") {
        Ok(path) => CampusNetwork::load(&path).expect("Failed to load campus catalog"),
        Err(_) => purdue_campus(),
    };
    info!(
        loops = network.loops().len(),
        stops = network.stop_count(), "campus network loaded"
    );

    // Directions provider: fixtures for offline development, else the live API
    let backend = match std::env::var("MOCK_DIRECTIONS_DIR") {
        Ok(dir) => {
            info!(%dir, "serving directions from fixtures");
            DirectionsBackend::Mock(
                MockDirectionsClient::new(&dir).expect("Failed to load mock directions"),
            )
        }
        Err(_) => {
            let api_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default();
            match DirectionsClient::new(DirectionsConfig::new(api_key)) {
                Ok(client) => DirectionsBackend::Live(client),
                Err(e) => {
                    warn!(error = %e, "Off-campus searches will return nothing");
                    DirectionsBackend::Mock(MockDirectionsClient::from_responses(
                        Default::default(),
                    ))
                }
            }
        }
    };

    let directions = CachedDirections::new(backend, &CacheConfig::default());
    let state = AppState::new(network, directions, FinderConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address");
    info!(%addr, "Campus route finder listening");
    info!("  GET /health             - Health check");
    info!("  GET /api/routes         - Find routes (origin, destination, sort)");
    info!("  GET /api/stops          - Campus stop catalog");
    info!("  GET /api/stops/resolve  - Resolve text to a stop (q)");
    info!("  GET /api/shuttle/rides  - Intercampus shuttle timetable (date, days)");
    info!("  GET /api/flights        - LAF / ORD flight schedule (direction)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
