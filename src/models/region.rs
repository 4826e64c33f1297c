use serde::{Deserialize, Serialize};
use validator::Validate;

/// A GeoJSON position, longitude first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// One closed boundary loop, closing vertex included as stored
pub type Ring = Vec<Position>;

/// Rings of a polygon: the outer boundary followed by any holes
pub type Polygon = Vec<Ring>;

/// A timezone boundary as read from the GeoJSON file
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub tzid: String,
    pub polygons: Vec<Polygon>,
}

impl Region {
    pub fn new(tzid: String, polygons: Vec<Polygon>) -> Self {
        Self { tzid, polygons }
    }

    /// Every ring of every polygon, in file order, holes included
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().flatten()
    }

    pub fn ring_count(&self) -> usize {
        self.polygons.iter().map(Vec::len).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.rings().map(Vec::len).sum()
    }
}

/// The representative location written to the timezone table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegionAverage {
    #[validate(length(min = 1))]
    pub tzid: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl RegionAverage {
    pub fn new(tzid: String, latitude: f64, longitude: f64) -> Self {
        Self {
            tzid,
            latitude,
            longitude,
        }
    }
}

/// A row of the timezone CSV with the coordinates kept exactly as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneRow {
    pub tzid: String,
    pub latitude: String,
    pub longitude: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_flatten_polygons() {
        let ring = vec![Position::new(0.0, 0.0), Position::new(1.0, 1.0)];
        let region = Region::new(
            "Europe/Paris".to_string(),
            vec![vec![ring.clone(), ring.clone()], vec![ring]],
        );

        assert_eq!(region.ring_count(), 3);
        assert_eq!(region.rings().count(), 3);
        assert_eq!(region.vertex_count(), 6);
    }

    #[test]
    fn test_region_average_validation() {
        let ok = RegionAverage::new("Asia/Tokyo".to_string(), 35.6, 139.7);
        assert!(ok.validate().is_ok());

        let bad = RegionAverage::new("Nowhere".to_string(), 95.0, 0.0);
        assert!(bad.validate().is_err());
    }
}
