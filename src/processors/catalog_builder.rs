use crate::error::Result;
use crate::models::{ClubCode, LunarFeature, Membership, ShapeRecord};
use crate::processors::feature_joiner::FeatureJoiner;
use crate::processors::supplementary::SupplementaryFeatures;
use std::collections::{BTreeMap, HashSet};
use tracing::{info, warn};
use validator::Validate;

/// Assembles the ordered catalog: joined shapefile features, then the
/// supplementary domes and landing sites
pub struct CatalogBuilder<'a> {
    membership: &'a Membership,
    supplement: SupplementaryFeatures,
    skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSummary {
    pub shape_records: usize,
    pub joined: usize,
    pub filtered: usize,
    pub supplementary: usize,
    pub by_club: BTreeMap<ClubCode, usize>,
    /// Membership names found in neither the shapefile nor the supplement
    pub unmatched: Vec<String>,
}

impl CatalogSummary {
    pub fn total(&self) -> usize {
        self.joined + self.supplementary
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Catalog Summary:\n");
        summary.push_str(&format!("  Shapefile records: {}\n", self.shape_records));
        summary.push_str(&format!("  Joined with membership: {}\n", self.joined));
        summary.push_str(&format!("  Not on membership list: {}\n", self.filtered));
        summary.push_str(&format!("  Supplementary features: {}\n", self.supplementary));
        summary.push_str(&format!("  Catalog total: {}\n", self.total()));

        for (club, count) in &self.by_club {
            summary.push_str(&format!("    {}: {}\n", club, count));
        }

        if !self.unmatched.is_empty() {
            summary.push_str(&format!(
                "  Unmatched membership names: {}\n",
                self.unmatched.len()
            ));
        }

        summary
    }
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(membership: &'a Membership, supplement: SupplementaryFeatures) -> Self {
        Self {
            membership,
            supplement,
            skipped: 0,
        }
    }

    /// Rows the reader already left out because their name is not on the list
    pub fn with_skipped(mut self, rows: usize) -> Self {
        self.skipped = rows;
        self
    }

    pub fn build(self, records: &[ShapeRecord]) -> Result<(Vec<LunarFeature>, CatalogSummary)> {
        let outcome = FeatureJoiner::new(self.membership).join_all(records);

        let mut summary = CatalogSummary {
            shape_records: records.len() + self.skipped,
            joined: outcome.features.len(),
            filtered: outcome.filtered + self.skipped,
            supplementary: self.supplement.len(),
            ..CatalogSummary::default()
        };

        let joined_names: HashSet<&str> =
            outcome.features.iter().map(|f| f.name.as_str()).collect();
        let mut unmatched: Vec<String> = self
            .membership
            .names()
            .filter(|name| !joined_names.contains(name) && !self.supplement.contains(name))
            .map(str::to_string)
            .collect();
        unmatched.sort();
        for name in &unmatched {
            warn!("Membership entry '{}' matched no shapefile feature", name);
        }
        summary.unmatched = unmatched;

        let mut features = outcome.features;
        features.extend(self.supplement.into_features());

        for feature in &features {
            feature.validate()?;
            *summary.by_club.entry(feature.lunar_code).or_default() += 1;
        }

        info!(
            "Assembled {} catalog features ({} joined, {} supplementary)",
            features.len(),
            summary.joined,
            summary.supplementary
        );

        Ok((features, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MembershipEntry;
    use crate::ProcessingError;

    fn record(name: &str, center_longitude: f64) -> ShapeRecord {
        ShapeRecord {
            clean_name: name.to_string(),
            diameter: 100.0,
            center_longitude,
            center_latitude: 51.6,
            feature_type: "Crater".to_string(),
            min_longitude: 355.0,
            max_longitude: 2.0,
            min_latitude: 50.0,
            max_latitude: 53.0,
            quad_name: "Plato".to_string(),
            quad_code: "LAC-12".to_string(),
        }
    }

    fn membership() -> Membership {
        vec![
            MembershipEntry::new("Plato".to_string(), ClubCode::Lunar, Some(2)),
            MembershipEntry::new("Kies Pi".to_string(), ClubCode::LunarII, None),
            MembershipEntry::new("Nonexistent".to_string(), ClubCode::Both, None),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_build_orders_joined_before_supplement() -> Result<()> {
        let membership = membership();
        let builder = CatalogBuilder::new(&membership, SupplementaryFeatures::builtin()?);

        let (features, summary) =
            builder.build(&[record("Abbot", 10.0), record("Plato", 350.6)])?;

        assert_eq!(features.len(), 23);
        assert_eq!(features[0].name, "Plato");
        assert!((features[0].longitude - -9.4).abs() < 1e-9);
        assert_eq!(features[1].name, "Arago Alpha");
        assert_eq!(features[22].name, "Apollo 17");

        assert_eq!(summary.shape_records, 2);
        assert_eq!(summary.joined, 1);
        assert_eq!(summary.filtered, 1);
        assert_eq!(summary.supplementary, 22);
        assert_eq!(summary.total(), 23);
        assert_eq!(summary.by_club.get(&ClubCode::Lunar), Some(&1));
        assert_eq!(summary.by_club.get(&ClubCode::LunarII), Some(&22));
        assert_eq!(summary.unmatched, vec!["Nonexistent".to_string()]);
        assert!(summary.generate_summary().contains("Catalog total: 23"));

        Ok(())
    }

    #[test]
    fn test_skipped_rows_count_as_filtered() -> Result<()> {
        let membership = membership();
        let builder = CatalogBuilder::new(&membership, SupplementaryFeatures::builtin()?)
            .with_skipped(4);

        let (features, summary) = builder.build(&[record("Plato", 350.6)])?;

        assert_eq!(features.len(), 23);
        assert_eq!(summary.shape_records, 5);
        assert_eq!(summary.joined, 1);
        assert_eq!(summary.filtered, 4);

        Ok(())
    }

    #[test]
    fn test_invalid_joined_feature_aborts() -> Result<()> {
        let membership = membership();
        let builder = CatalogBuilder::new(&membership, SupplementaryFeatures::builtin()?);

        let mut bad = record("Plato", 350.6);
        bad.center_latitude = 123.0;

        let err = builder.build(&[bad]).unwrap_err();
        assert!(matches!(err, ProcessingError::Validation(_)));

        Ok(())
    }
}
