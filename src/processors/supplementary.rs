use crate::error::Result;
use crate::models::LunarFeature;
use crate::utils::TextDecoding;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

const BUILTIN_SUPPLEMENT: &str = include_str!("../../data/supplementary_features.json");

/// Hand-curated features the nomenclature shapefile lacks.
///
/// Dome extents were derived from the listed diameter on a 1737.1 km mean
/// lunar radius; landing sites use a nominal 0.01 km for diameter and extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryFeatures {
    pub domes: Vec<LunarFeature>,
    pub landing_sites: Vec<LunarFeature>,
}

impl SupplementaryFeatures {
    /// The table compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_SUPPLEMENT)
    }

    pub fn from_path(path: &Path, decoding: &TextDecoding) -> Result<Self> {
        let text = decoding.read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let table: SupplementaryFeatures = serde_json::from_str(json)?;
        for feature in table.domes.iter().chain(&table.landing_sites) {
            feature.validate()?;
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.domes.len() + self.landing_sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.domes
            .iter()
            .chain(&self.landing_sites)
            .any(|feature| feature.name == name)
    }

    /// Domes first, then landing sites
    pub fn into_features(self) -> Vec<LunarFeature> {
        let mut features = self.domes;
        features.extend(self.landing_sites);
        features
    }
}
