pub mod lunar_feature;
pub mod membership;
pub mod region;
pub mod shape_record;

pub use lunar_feature::{ClubCode, LunarFeature, ObservingType};
pub use membership::{Membership, MembershipEntry};
pub use region::{Polygon, Position, Region, RegionAverage, Ring, TimezoneRow};
pub use shape_record::{NamedFeature, ShapeRecord};
