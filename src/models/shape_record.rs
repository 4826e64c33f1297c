use serde::{Deserialize, Serialize};

/// Attribute row of the nomenclature shapefile, as used by the catalog build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Feature name without diacritical marks
    pub clean_name: String,
    pub diameter: f64,
    /// East-positive, [0, 360)
    pub center_longitude: f64,
    pub center_latitude: f64,
    /// May hold a comma-joined list of types
    pub feature_type: String,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub quad_name: String,
    pub quad_code: String,
}

impl ShapeRecord {
    /// First entry of the feature type list
    pub fn primary_type(&self) -> &str {
        self.feature_type
            .split(',')
            .next()
            .unwrap_or(&self.feature_type)
    }
}

/// Name and type of a shapefile row, the only columns the seed file needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFeature {
    pub clean_name: String,
    /// Kept untruncated
    pub feature_type: String,
}
