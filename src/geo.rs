//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Mean Earth radius in kilometers (IUGG), the sphere every route weight is measured on
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A point on the Earth's surface in decimal degrees.
///
/// Serialized as a `[latitude, longitude]` pair so network files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Returns true if both components are finite and inside their geographic range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Checks the coordinate registered under `name`
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate {
                name: name.to_string(),
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great-circle distance to `other` on a sphere of the given radius
    pub fn distance_to(&self, other: &Coordinate, radius: f64) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // Clamp guards asin against rounding just above 1 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        radius * c
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

/// Haversine distance between two coordinates in kilometers
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    a.distance_to(b, EARTH_RADIUS_KM)
}
