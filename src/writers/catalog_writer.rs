use crate::error::Result;
use crate::models::LunarFeature;
use crate::utils::constants::{
    ANDROID_KEY_COLUMN, ANDROID_METADATA_TABLE, DEFAULT_ANDROID_LOCALE, DESKTOP_KEY_COLUMN,
    FEATURES_TABLE,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Feature columns after the primary key, in insertion order
pub const FEATURE_COLUMNS: [(&str, &str); 11] = [
    ("Name", "TEXT"),
    ("Diameter", "REAL"),
    ("Latitude", "REAL"),
    ("Longitude", "REAL"),
    ("Delta_Latitude", "REAL"),
    ("Delta_Longitude", "REAL"),
    ("Type", "TEXT"),
    ("Quad_Name", "TEXT"),
    ("Quad_Code", "TEXT"),
    ("Lunar_Code", "TEXT"),
    ("Lunar_Club_Type", "TEXT"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogVariant {
    Desktop,
    /// `_id` key plus the `android_metadata` locale table
    Android,
}

impl CatalogVariant {
    pub fn key_column(&self) -> &'static str {
        match self {
            CatalogVariant::Desktop => DESKTOP_KEY_COLUMN,
            CatalogVariant::Android => ANDROID_KEY_COLUMN,
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogVariant::Desktop => f.write_str("desktop"),
            CatalogVariant::Android => f.write_str("android"),
        }
    }
}

/// Writes the feature table into a SQLite file, replacing any previous table
pub struct CatalogWriter {
    variant: CatalogVariant,
    locale: String,
}

impl CatalogWriter {
    pub fn new(variant: CatalogVariant) -> Self {
        Self {
            variant,
            locale: DEFAULT_ANDROID_LOCALE.to_string(),
        }
    }

    pub fn desktop() -> Self {
        Self::new(CatalogVariant::Desktop)
    }

    pub fn android() -> Self {
        Self::new(CatalogVariant::Android)
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    pub fn variant(&self) -> CatalogVariant {
        self.variant
    }

    pub fn create_table_sql(&self) -> String {
        let mut columns = vec![format!("{} INTEGER PRIMARY KEY", self.variant.key_column())];
        columns.extend(
            FEATURE_COLUMNS
                .iter()
                .map(|(name, kind)| format!("{} {}", name, kind)),
        );
        format!("CREATE TABLE {}({})", FEATURES_TABLE, columns.join(","))
    }

    fn insert_sql(&self) -> String {
        let placeholders = vec!["?"; FEATURE_COLUMNS.len()].join(", ");
        format!("INSERT INTO {} VALUES(null, {})", FEATURES_TABLE, placeholders)
    }

    /// Create or open `path` and write `features` into it
    pub async fn write_catalog(
        &self,
        features: &[LunarFeature],
        path: &Path,
    ) -> Result<CatalogFileInfo> {
        let mut conn = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .connect()
            .await?;

        self.write_to_connection(&mut conn, features).await?;
        conn.close().await?;

        let info = CatalogFileInfo {
            path: path.to_path_buf(),
            variant: self.variant,
            rows: features.len(),
        };
        info!("Wrote {} catalog: {}", self.variant, info.summary());

        Ok(info)
    }

    /// Replace the tables on an open connection inside one transaction
    pub async fn write_to_connection(
        &self,
        conn: &mut SqliteConnection,
        features: &[LunarFeature],
    ) -> Result<()> {
        let mut tx = conn.begin().await?;

        sqlx::query(&format!("DROP TABLE IF EXISTS {}", FEATURES_TABLE))
            .execute(&mut *tx)
            .await?;
        sqlx::query(&self.create_table_sql())
            .execute(&mut *tx)
            .await?;

        let insert = self.insert_sql();
        for feature in features {
            sqlx::query(&insert)
                .bind(feature.name.as_str())
                .bind(feature.diameter)
                .bind(feature.latitude)
                .bind(feature.longitude)
                .bind(feature.delta_latitude)
                .bind(feature.delta_longitude)
                .bind(feature.feature_type.as_str())
                .bind(feature.quad_name.as_str())
                .bind(feature.quad_code.as_str())
                .bind(feature.lunar_code.as_str())
                .bind(feature.lunar_club_type.map(|t| t.as_str()))
                .execute(&mut *tx)
                .await?;
        }
        debug!("Inserted {} rows into {}", features.len(), FEATURES_TABLE);

        if self.variant == CatalogVariant::Android {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", ANDROID_METADATA_TABLE))
                .execute(&mut *tx)
                .await?;
            sqlx::query(&format!(
                "CREATE TABLE {} (locale TEXT DEFAULT '{}')",
                ANDROID_METADATA_TABLE, DEFAULT_ANDROID_LOCALE
            ))
            .execute(&mut *tx)
            .await?;
            sqlx::query(&format!("INSERT INTO {} VALUES(?)", ANDROID_METADATA_TABLE))
                .bind(self.locale.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFileInfo {
    pub path: PathBuf,
    pub variant: CatalogVariant,
    pub rows: usize,
}

impl CatalogFileInfo {
    pub fn summary(&self) -> String {
        format!(
            "{} ({} rows, key column {})",
            self.path.display(),
            self.rows,
            self.variant.key_column()
        )
    }
}
