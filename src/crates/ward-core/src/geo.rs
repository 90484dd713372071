//! Geographic coordinates and distance math

use serde::{Deserialize, Serialize};

/// Mean Earth radius in miles
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Downtown San Francisco, the fallback center when no location fix exists
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 37.7749,
    lng: -122.4194,
};

/// A WGS84 latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, positive north
    pub lat: f64,

    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle (haversine) distance to another point, in miles
    pub fn distance_miles(&self, other: &Coordinates) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }

    /// Whether another point lies within `radius_miles` of this one
    pub fn within_radius(&self, other: &Coordinates, radius_miles: f64) -> bool {
        self.distance_miles(other) <= radius_miles
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinates::new(37.7749, -122.4194);
        assert!(p.distance_miles(&p) < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates::new(37.7749, -122.4194);
        let b = Coordinates::new(37.7849, -122.4094);
        let ab = a.distance_miles(&b);
        let ba = b.distance_miles(&a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_known_pair() {
        // A hundredth of a degree apart in each axis near San Francisco
        // is a bit under a mile.
        let a = Coordinates::new(37.7749, -122.4194);
        let b = Coordinates::new(37.7849, -122.4094);
        let d = a.distance_miles(&b);
        assert!(d > 0.8 && d < 1.0, "unexpected distance: {d}");
    }

    #[test]
    fn test_within_radius_boundary() {
        let a = Coordinates::new(37.7749, -122.4194);
        let b = Coordinates::new(37.7849, -122.4094);
        assert!(a.within_radius(&b, 1.0));
        assert!(!a.within_radius(&b, 0.5));
    }
}
