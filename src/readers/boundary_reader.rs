use crate::error::{ProcessingError, Result};
use crate::models::{Polygon, Position, Region, Ring};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

type RawPosition = Vec<f64>;
type RawRing = Vec<RawPosition>;
type RawPolygon = Vec<RawRing>;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<BoundaryFeature>,
}

#[derive(Debug, Deserialize)]
struct BoundaryFeature {
    properties: BoundaryProperties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct BoundaryProperties {
    tzid: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Polygon(RawPolygon),
    MultiPolygon(Vec<RawPolygon>),
}

/// Reads timezone boundary polygons from a GeoJSON feature collection
pub struct BoundaryReader;

impl BoundaryReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_regions(&self, path: &Path) -> Result<Vec<Region>> {
        let file = File::open(path)?;
        let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))?;
        debug!("Read {} boundary features", collection.features.len());
        collection.features.into_iter().map(convert_feature).collect()
    }

    pub fn parse_regions(&self, json: &str) -> Result<Vec<Region>> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        collection.features.into_iter().map(convert_feature).collect()
    }
}

impl Default for BoundaryReader {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_feature(feature: BoundaryFeature) -> Result<Region> {
    let tzid = feature.properties.tzid;
    let raw_polygons = match feature.geometry {
        Geometry::Polygon(polygon) => vec![polygon],
        Geometry::MultiPolygon(polygons) => polygons,
    };

    let polygons = raw_polygons
        .into_iter()
        .map(|polygon| convert_polygon(&tzid, polygon))
        .collect::<Result<Vec<Polygon>>>()?;

    Ok(Region::new(tzid, polygons))
}

fn convert_polygon(tzid: &str, polygon: RawPolygon) -> Result<Polygon> {
    polygon
        .into_iter()
        .map(|ring| {
            ring.iter()
                .map(|position| convert_position(tzid, position))
                .collect::<Result<Ring>>()
        })
        .collect()
}

fn convert_position(tzid: &str, position: &[f64]) -> Result<Position> {
    match position {
        [longitude, latitude, ..] => Ok(Position::new(*longitude, *latitude)),
        _ => Err(ProcessingError::InvalidFormat(format!(
            "Region {}: position {:?} needs longitude and latitude",
            tzid, position
        ))),
    }
}
