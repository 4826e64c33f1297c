use crate::error::{ProcessingError, Result};
use crate::models::{Membership, NamedFeature, ShapeRecord};
use crate::settings::ShapeFieldNames;
use crate::utils::TextDecoding;
use dbase::{FieldInfo, FieldValue, Record};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the attribute table (`.dbf`) that sits next to a nomenclature `.shp`
pub struct ShapeReader {
    fields: ShapeFieldNames,
    decoding: TextDecoding,
}

/// Rows kept for the catalog and the number of rows left out
#[derive(Debug, Clone, Default)]
pub struct ShapeSelection {
    pub records: Vec<ShapeRecord>,
    /// Rows whose name is not on the membership list
    pub skipped: usize,
}

impl ShapeSelection {
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.skipped
    }
}

impl ShapeReader {
    pub fn new() -> Self {
        Self {
            fields: ShapeFieldNames::default(),
            decoding: TextDecoding::default(),
        }
    }

    pub fn with_fields(mut self, fields: ShapeFieldNames) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_decoding(mut self, decoding: TextDecoding) -> Self {
        self.decoding = decoding;
        self
    }

    /// `MOON_nomenclature.shp` -> `MOON_nomenclature.dbf`
    pub fn attribute_path(shapefile: &Path) -> PathBuf {
        shapefile.with_extension("dbf")
    }

    /// Extracts the rows named on the membership list. Other rows are only
    /// counted; none of their cells besides the name are read.
    pub fn read_members(&self, shapefile: &Path, membership: &Membership) -> Result<ShapeSelection> {
        let (fields, rows) = self.read_table(shapefile)?;
        let columns = ColumnMap::resolve(&self.fields, &fields)?;

        let mut selection = ShapeSelection::default();
        for (row, record) in rows.iter().enumerate() {
            let name = text_field(record, &columns.clean_name, row)?;
            if membership.contains(&name) {
                selection.records.push(columns.extract(record, row)?);
            } else {
                selection.skipped += 1;
            }
        }

        debug!(
            "Kept {} of {} attribute rows",
            selection.records.len(),
            selection.total_rows()
        );
        Ok(selection)
    }

    /// Name and type of every row. Only those two columns must exist.
    pub fn read_names_and_types(&self, shapefile: &Path) -> Result<Vec<NamedFeature>> {
        let (fields, rows) = self.read_table(shapefile)?;
        let name_column = find_column(&fields, &self.fields.clean_name)?;
        let type_column = find_column(&fields, &self.fields.feature_type)?;

        rows.iter()
            .enumerate()
            .map(|(row, record)| {
                Ok(NamedFeature {
                    clean_name: text_field(record, &name_column, row)?,
                    feature_type: text_field(record, &type_column, row)?,
                })
            })
            .collect()
    }

    fn read_table(&self, shapefile: &Path) -> Result<(Vec<FieldInfo>, Vec<Record>)> {
        let dbf_path = Self::attribute_path(shapefile);
        let encoding = self.decoding.encoding()?;
        if encoding != encoding_rs::UTF_8 {
            return Err(ProcessingError::Encoding(format!(
                "{} can only be decoded as UTF-8, not {}",
                dbf_path.display(),
                encoding.name()
            )));
        }

        let mut reader = if self.decoding.lossy {
            dbase::Reader::from_path_with_encoding(&dbf_path, dbase::UnicodeLossy)?
        } else {
            dbase::Reader::from_path_with_encoding(&dbf_path, dbase::Unicode)?
        };

        let fields = reader.fields().to_vec();
        let rows = reader.read()?;
        debug!("Read {} rows from {}", rows.len(), dbf_path.display());

        Ok((fields, rows))
    }
}

impl Default for ShapeReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact column name in the file for a configured field name
fn find_column(fields: &[FieldInfo], wanted: &str) -> Result<String> {
    fields
        .iter()
        .map(FieldInfo::name)
        .find(|name| name.eq_ignore_ascii_case(wanted))
        .map(str::to_string)
        .ok_or_else(|| ProcessingError::MissingField {
            field: wanted.to_string(),
        })
}

/// Configured field names resolved to the exact column names in the file
struct ColumnMap {
    clean_name: String,
    diameter: String,
    center_lon: String,
    center_lat: String,
    feature_type: String,
    min_lon: String,
    max_lon: String,
    min_lat: String,
    max_lat: String,
    quad_name: String,
    quad_code: String,
}

impl ColumnMap {
    fn resolve(names: &ShapeFieldNames, fields: &[FieldInfo]) -> Result<Self> {
        let find = |wanted: &str| find_column(fields, wanted);

        Ok(Self {
            clean_name: find(&names.clean_name)?,
            diameter: find(&names.diameter)?,
            center_lon: find(&names.center_lon)?,
            center_lat: find(&names.center_lat)?,
            feature_type: find(&names.feature_type)?,
            min_lon: find(&names.min_lon)?,
            max_lon: find(&names.max_lon)?,
            min_lat: find(&names.min_lat)?,
            max_lat: find(&names.max_lat)?,
            quad_name: find(&names.quad_name)?,
            quad_code: find(&names.quad_code)?,
        })
    }

    fn extract(&self, record: &Record, row: usize) -> Result<ShapeRecord> {
        Ok(ShapeRecord {
            clean_name: text_field(record, &self.clean_name, row)?,
            diameter: numeric_field(record, &self.diameter, row)?,
            center_longitude: numeric_field(record, &self.center_lon, row)?,
            center_latitude: numeric_field(record, &self.center_lat, row)?,
            feature_type: text_field(record, &self.feature_type, row)?,
            min_longitude: numeric_field(record, &self.min_lon, row)?,
            max_longitude: numeric_field(record, &self.max_lon, row)?,
            min_latitude: numeric_field(record, &self.min_lat, row)?,
            max_latitude: numeric_field(record, &self.max_lat, row)?,
            quad_name: text_field(record, &self.quad_name, row)?,
            quad_code: text_field(record, &self.quad_code, row)?,
        })
    }
}

fn text_field(record: &Record, column: &str, row: usize) -> Result<String> {
    match record.get(column) {
        Some(FieldValue::Character(value)) => {
            Ok(value.as_deref().unwrap_or_default().trim().to_string())
        }
        Some(FieldValue::Memo(value)) => Ok(value.trim().to_string()),
        Some(other) => Err(ProcessingError::InvalidFormat(format!(
            "Row {}: field '{}' is not text ({:?})",
            row, column, other
        ))),
        None => Err(ProcessingError::MissingData(format!(
            "Row {}: field '{}'",
            row, column
        ))),
    }
}

fn numeric_field(record: &Record, column: &str, row: usize) -> Result<f64> {
    let value = match record.get(column) {
        Some(FieldValue::Numeric(value)) => *value,
        Some(FieldValue::Float(value)) => value.map(f64::from),
        Some(FieldValue::Double(value)) => Some(*value),
        Some(FieldValue::Currency(value)) => Some(*value),
        Some(FieldValue::Integer(value)) => Some(f64::from(*value)),
        Some(other) => {
            return Err(ProcessingError::InvalidFormat(format!(
                "Row {}: field '{}' is not numeric ({:?})",
                row, column, other
            )))
        }
        None => None,
    };

    value.ok_or_else(|| ProcessingError::MissingData(format!("Row {}: field '{}'", row, column)))
}
