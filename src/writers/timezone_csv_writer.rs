use crate::error::Result;
use crate::models::RegionAverage;
use crate::utils::constants::TIMEZONE_CSV_HEADER;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `#Timezone,Latitude,Longitude` rows in input order
pub struct TimezoneCsvWriter;

impl TimezoneCsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_averages(&self, averages: &[RegionAverage], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(averages, file)
    }

    pub fn write_to<W: Write>(&self, averages: &[RegionAverage], output: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(TIMEZONE_CSV_HEADER)?;

        for average in averages {
            writer.write_record([
                average.tzid.clone(),
                average.latitude.to_string(),
                average.longitude.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for TimezoneCsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
