pub mod catalog_builder;
pub mod feature_joiner;
pub mod region_averager;
pub mod supplementary;

pub use catalog_builder::{CatalogBuilder, CatalogSummary};
pub use feature_joiner::{FeatureJoiner, JoinOutcome};
pub use region_averager::RegionAverager;
pub use supplementary::SupplementaryFeatures;
