use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Which observing program(s) a feature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClubCode {
    Lunar,
    LunarII,
    Both,
}

impl ClubCode {
    /// Map a membership file code (1, 2 or 3) to its club
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ClubCode::Lunar),
            2 => Some(ClubCode::LunarII),
            3 => Some(ClubCode::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCode::Lunar => "Lunar",
            ClubCode::LunarII => "LunarII",
            ClubCode::Both => "Both",
        }
    }
}

impl fmt::Display for ClubCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observing aid a club feature calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservingType {
    #[serde(rename = "Naked Eye")]
    NakedEye,
    Binocular,
    Telescopic,
}

impl ObservingType {
    /// Map a membership file code (0, 1 or 2); anything else has no type
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ObservingType::NakedEye),
            1 => Some(ObservingType::Binocular),
            2 => Some(ObservingType::Telescopic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservingType::NakedEye => "Naked Eye",
            ObservingType::Binocular => "Binocular",
            ObservingType::Telescopic => "Telescopic",
        }
    }
}

impl fmt::Display for ObservingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the Moon feature catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LunarFeature {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub diameter: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = 0.0))]
    pub delta_latitude: f64,

    #[validate(range(min = 0.0))]
    pub delta_longitude: f64,

    pub feature_type: String,
    pub quad_name: String,
    pub quad_code: String,
    pub lunar_code: ClubCode,

    #[serde(default)]
    pub lunar_club_type: Option<ObservingType>,
}
