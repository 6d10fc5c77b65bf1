//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Straight-line distance to `other` in miles.
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        distance_miles(*self, *other)
    }
}

/// Haversine distance between two points, in miles.
pub fn distance_miles(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let pmu = LatLng::new(40.4267, -86.9196);
        assert_eq!(pmu.distance_to(&pmu), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = LatLng::new(40.4245, -86.9165);
        let b = LatLng::new(40.4085, -86.9395);
        assert!((distance_miles(a, b) - distance_miles(b, a)).abs() < 1e-12);
    }

    #[test]
    fn known_campus_distance() {
        // Lynn Hall to CL50
        let lynn = LatLng::new(40.4245, -86.9165);
        let cl50 = LatLng::new(40.4280, -86.9220);
        let d = distance_miles(lynn, cl50);
        assert!((d - 0.3771).abs() < 1e-3, "got {d}");
    }

    #[test]
    fn west_lafayette_to_indianapolis() {
        let wl = LatLng::new(40.4240615, -86.912087);
        let indy = LatLng::new(39.773038, -86.169873);
        let d = distance_miles(wl, indy);
        assert!(d > 55.0 && d < 65.0, "got {d}");
    }
}
