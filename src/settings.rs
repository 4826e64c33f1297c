use crate::error::Result;
use crate::utils::TextDecoding;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_SETTINGS: &str = include_str!("../config/default.toml");
const ENV_PREFIX: &str = "ASTRO_PREP";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub text: TextDecoding,
    pub timezone: TimezoneSettings,
    pub catalog: CatalogSettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimezoneSettings {
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub shapefile: PathBuf,
    pub membership: PathBuf,
    pub desktop_db: PathBuf,
    pub android_db: PathBuf,
    pub android_locale: String,
    /// Replaces the built-in dome and landing-site table when set
    #[serde(default)]
    pub supplement: Option<PathBuf>,
    pub fields: ShapeFieldNames,
}

/// `.dbf` column backing each `ShapeRecord` field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShapeFieldNames {
    pub clean_name: String,
    pub diameter: String,
    pub center_lon: String,
    pub center_lat: String,
    pub feature_type: String,
    pub min_lon: String,
    pub max_lon: String,
    pub min_lat: String,
    pub max_lat: String,
    pub quad_name: String,
    pub quad_code: String,
}

impl Default for ShapeFieldNames {
    fn default() -> Self {
        Self {
            clean_name: "clean_name".to_string(),
            diameter: "diameter".to_string(),
            center_lon: "center_lon".to_string(),
            center_lat: "center_lat".to_string(),
            feature_type: "type".to_string(),
            min_lon: "min_lon".to_string(),
            max_lon: "max_lon".to_string(),
            min_lat: "min_lat".to_string(),
            max_lat: "max_lat".to_string(),
            quad_name: "quad_name".to_string(),
            quad_code: "quad_code".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    pub output: PathBuf,
}

impl Settings {
    /// Layer built-in defaults, an optional TOML file and `ASTRO_PREP__*` variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
