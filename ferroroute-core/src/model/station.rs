use geo::{Distance, Euclidean, Point};

/// A named stop of the network.
///
/// The geometry stores longitude as `x` and latitude as `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    geometry: Point<f64>,
}

impl Station {
    pub(crate) fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            geometry: Point::new(longitude, latitude),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }

    pub fn geometry(&self) -> Point<f64> {
        self.geometry
    }

    /// Straight-line distance in coordinate units, treating
    /// (longitude, latitude) as a plane. No geodesic correction.
    pub fn planar_distance(&self, other: &Station) -> f64 {
        Euclidean.distance(self.geometry, other.geometry)
    }
}
