//! Spatial constraint types consumed from the map-drawing surface.

use serde::{Deserialize, Serialize};

/// Geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// `west,south,east,north` string form used by the backend.
    pub fn to_query_value(&self) -> String {
        format!("{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

/// A spatial containment constraint: a resolvable place name, or a box
/// drawn on the map. Only the resulting shape is consumed here; the
/// drawing interaction lives elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpatialConstraint {
    Place(String),
    Box(BoundingBox),
}

impl SpatialConstraint {
    /// The value paired with the `within` operator parameter.
    pub fn query_value(&self) -> String {
        match self {
            SpatialConstraint::Place(name) => name.clone(),
            SpatialConstraint::Box(bbox) => bbox.to_query_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_query_value() {
        let bbox = BoundingBox::new(-124.5, 32.5, -114.1, 42.0);
        assert_eq!(bbox.to_query_value(), "-124.5,32.5,-114.1,42");
    }

    #[test]
    fn place_query_value() {
        let place = SpatialConstraint::Place("Snake River".to_string());
        assert_eq!(place.query_value(), "Snake River");
    }
}
