use crate::error::{ProcessingError, Result};
use crate::models::TimezoneRow;
use crate::utils::constants::CSV_COMMENT_PREFIX;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// Reads back the timezone table written by `TimezoneCsvWriter`.
/// Rows whose first field starts with `#` are comments. Coordinates must
/// parse as numbers but keep their original text.
pub struct TimezoneCsvReader;

impl TimezoneCsvReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_rows(&self, path: &Path) -> Result<Vec<TimezoneRow>> {
        let file = std::fs::File::open(path)?;
        self.read_from(file)
    }

    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<TimezoneRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut rows = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let is_comment = row
                .get(0)
                .map_or(true, |first| first.starts_with(CSV_COMMENT_PREFIX));
            if is_comment {
                continue;
            }
            rows.push(parse_row(&row, index + 1)?);
        }

        Ok(rows)
    }
}

impl Default for TimezoneCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_row(row: &StringRecord, line: usize) -> Result<TimezoneRow> {
    if row.len() < 3 {
        return Err(ProcessingError::InvalidFormat(format!(
            "Line {}: expected 3 fields, got {}",
            line,
            row.len()
        )));
    }

    let coordinate = |value: &str| -> Result<String> {
        value.trim().parse::<f64>().map_err(|_| {
            ProcessingError::InvalidFormat(format!("Line {}: invalid coordinate '{}'", line, value))
        })?;
        Ok(value.to_string())
    };

    Ok(TimezoneRow {
        tzid: row[0].to_string(),
        latitude: coordinate(&row[1])?,
        longitude: coordinate(&row[2])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comment_rows() -> Result<()> {
        let input = "#Timezone,Latitude,Longitude\nEurope/Oslo,64.5,12.25\nAsia/Tokyo,33.1,134.9\n";
        let rows = TimezoneCsvReader::new().read_from(input.as_bytes())?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tzid, "Europe/Oslo");
        assert_eq!(rows[0].latitude, "64.5");
        assert_eq!(rows[1].tzid, "Asia/Tokyo");

        Ok(())
    }

    #[test]
    fn test_coordinates_keep_their_text() -> Result<()> {
        let rows = TimezoneCsvReader::new().read_from("Europe/Oslo,64.50,2.0\n".as_bytes())?;

        assert_eq!(
            rows,
            vec![TimezoneRow {
                tzid: "Europe/Oslo".to_string(),
                latitude: "64.50".to_string(),
                longitude: "2.0".to_string(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_rejects_bad_rows() {
        let reader = TimezoneCsvReader::new();
        assert!(reader.read_from("Europe/Oslo,64.5\n".as_bytes()).is_err());
        assert!(reader.read_from("Europe/Oslo,north,12.0\n".as_bytes()).is_err());
    }
}
