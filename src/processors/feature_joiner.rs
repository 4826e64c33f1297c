use crate::models::{LunarFeature, Membership, ShapeRecord};
use crate::utils::coordinates::{extent, normalize_longitude};

/// Matches shapefile rows against the club membership list
pub struct FeatureJoiner<'a> {
    membership: &'a Membership,
}

#[derive(Debug, Clone, Default)]
pub struct JoinOutcome {
    pub features: Vec<LunarFeature>,
    /// Rows whose name is not on the membership list
    pub filtered: usize,
}

impl<'a> FeatureJoiner<'a> {
    pub fn new(membership: &'a Membership) -> Self {
        Self { membership }
    }

    /// Build the catalog row for a shapefile record, or `None` if the
    /// feature is not tracked by the club
    pub fn join_record(&self, record: &ShapeRecord) -> Option<LunarFeature> {
        let entry = self.membership.get(&record.clean_name)?;

        Some(LunarFeature {
            name: record.clean_name.clone(),
            diameter: record.diameter,
            latitude: record.center_latitude,
            longitude: normalize_longitude(record.center_longitude),
            delta_latitude: extent(record.min_latitude, record.max_latitude),
            delta_longitude: extent(record.min_longitude, record.max_longitude),
            feature_type: record.primary_type().to_string(),
            quad_name: record.quad_name.clone(),
            quad_code: record.quad_code.clone(),
            lunar_code: entry.club,
            lunar_club_type: entry.observing_type(),
        })
    }

    pub fn join_all(&self, records: &[ShapeRecord]) -> JoinOutcome {
        let mut outcome = JoinOutcome::default();

        for record in records {
            match self.join_record(record) {
                Some(feature) => outcome.features.push(feature),
                None => outcome.filtered += 1,
            }
        }

        outcome
    }
}
