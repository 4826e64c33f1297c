use crate::error::Result;
use crate::models::RegionAverage;
use crate::processors::{CatalogBuilder, CatalogSummary, RegionAverager, SupplementaryFeatures};
use crate::readers::{BoundaryReader, MembershipReader, ShapeReader, TimezoneCsvReader};
use crate::settings::{CatalogSettings, ShapeFieldNames};
use crate::utils::{ProgressReporter, TextDecoding};
use crate::writers::{CatalogFileInfo, CatalogWriter, SeedWriter, SwiftDictWriter, TimezoneCsvWriter};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// GeoJSON boundaries -> per-region averages -> CSV
pub fn run_timezones(
    input: &Path,
    output: &Path,
    progress: &ProgressReporter,
) -> Result<Vec<RegionAverage>> {
    let regions = BoundaryReader::new().read_regions(input)?;
    info!(
        "Loaded {} timezone regions from {}",
        regions.len(),
        input.display()
    );

    progress.set_message("Averaging timezone regions");
    let averages = RegionAverager::new().average_all(&regions, Some(progress))?;

    TimezoneCsvWriter::new().write_averages(&averages, output)?;
    info!("Wrote {} rows to {}", averages.len(), output.display());

    Ok(averages)
}

/// Timezone CSV -> Swift dictionary entries
pub fn run_swift_dict<W: Write>(input: &Path, output: W) -> Result<usize> {
    let rows = TimezoneCsvReader::new().read_rows(input)?;
    SwiftDictWriter::new().write_to(&rows, output)?;
    Ok(rows.len())
}

/// Shapefile attributes -> uncurated membership file
pub fn run_seed(reader: &ShapeReader, shapefile: &Path, output: &Path) -> Result<usize> {
    let features = reader.read_names_and_types(shapefile)?;
    SeedWriter::new().write_seed(&features, output)?;
    info!(
        "Wrote {} seed lines to {}",
        features.len(),
        output.display()
    );
    Ok(features.len())
}

/// Inputs and outputs of one catalog build
#[derive(Debug, Clone)]
pub struct CatalogJob {
    pub shapefile: PathBuf,
    pub membership: PathBuf,
    pub desktop_db: PathBuf,
    pub android_db: PathBuf,
    pub android_locale: String,
    pub supplement: Option<PathBuf>,
    pub fields: ShapeFieldNames,
    pub decoding: TextDecoding,
}

#[derive(Debug, Clone)]
pub struct CatalogReport {
    pub summary: CatalogSummary,
    pub files: Vec<CatalogFileInfo>,
}

impl CatalogJob {
    pub fn from_settings(settings: &CatalogSettings, decoding: &TextDecoding) -> Self {
        Self {
            shapefile: settings.shapefile.clone(),
            membership: settings.membership.clone(),
            desktop_db: settings.desktop_db.clone(),
            android_db: settings.android_db.clone(),
            android_locale: settings.android_locale.clone(),
            supplement: settings.supplement.clone(),
            fields: settings.fields.clone(),
            decoding: decoding.clone(),
        }
    }

    pub fn shape_reader(&self) -> ShapeReader {
        ShapeReader::new()
            .with_fields(self.fields.clone())
            .with_decoding(self.decoding.clone())
    }

    /// Shapefile + membership list -> desktop and Android SQLite catalogs
    pub async fn run(&self, progress: &ProgressReporter) -> Result<CatalogReport> {
        let membership = MembershipReader::with_decoding(self.decoding.clone())
            .read_membership(&self.membership)?;
        info!(
            "Loaded {} club features from {}",
            membership.len(),
            self.membership.display()
        );

        let supplement = match &self.supplement {
            Some(path) => SupplementaryFeatures::from_path(path, &self.decoding)?,
            None => SupplementaryFeatures::builtin()?,
        };

        progress.set_message("Reading shapefile attributes");
        let selection = self
            .shape_reader()
            .read_members(&self.shapefile, &membership)?;
        progress.increment(selection.total_rows() as u64);

        let (features, summary) = CatalogBuilder::new(&membership, supplement)
            .with_skipped(selection.skipped)
            .build(&selection.records)?;

        progress.set_message("Writing catalogs");
        let desktop = CatalogWriter::desktop()
            .write_catalog(&features, &self.desktop_db)
            .await?;
        let android = CatalogWriter::android()
            .with_locale(&self.android_locale)
            .write_catalog(&features, &self.android_db)
            .await?;

        Ok(CatalogReport {
            summary,
            files: vec![desktop, android],
        })
    }
}
