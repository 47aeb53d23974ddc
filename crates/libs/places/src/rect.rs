use geo::HaversineDistance;
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Axis-aligned rectangle in degree space.
///
/// Corners are taken as given: a box with swapped corners, or one crossing
/// the antimeridian, contains nothing.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub southwest: Coord,
    pub northeast: Coord,
}

impl BoundingBox {
    pub fn new(southwest: Coord, northeast: Coord) -> Self {
        BoundingBox {
            southwest,
            northeast,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, coord: &Coord) -> bool {
        self.southwest.lat() <= coord.lat()
            && coord.lat() <= self.northeast.lat()
            && self.southwest.lng() <= coord.lng()
            && coord.lng() <= self.northeast.lng()
    }

    /// Great-circle distance between the two corners.
    pub fn diagonal_meters(&self) -> f64 {
        let southwest: Point = self.southwest.into();
        let northeast: Point = self.northeast.into();
        southwest.haversine_distance(&northeast)
    }
}
