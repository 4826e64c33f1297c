/// Timezone CSV
pub const TIMEZONE_CSV_HEADER: [&str; 3] = ["#Timezone", "Latitude", "Longitude"];
pub const CSV_COMMENT_PREFIX: char = '#';

/// Membership file layout
pub const MEMBERSHIP_DELIMITER: char = '|';
pub const UNASSIGNED_CLUB_CODE: i64 = 0;
pub const DEFAULT_OBSERVING_CODE: i64 = 3;

/// Catalog tables
pub const FEATURES_TABLE: &str = "Features";
pub const DESKTOP_KEY_COLUMN: &str = "Id";
pub const ANDROID_KEY_COLUMN: &str = "_id";
pub const ANDROID_METADATA_TABLE: &str = "android_metadata";
pub const DEFAULT_ANDROID_LOCALE: &str = "en_US";

/// Longitude band rewritten to negative (west) values
pub const LONGITUDE_WRAP_START: f64 = 180.0;
pub const FULL_TURN_DEGREES: f64 = 360.0;
