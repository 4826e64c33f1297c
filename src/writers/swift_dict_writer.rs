use crate::error::Result;
use crate::models::TimezoneRow;
use std::io::Write;

/// Emits timezone rows as Swift dictionary entries: `"<tzid>": (<lat>, <lon>),`
pub struct SwiftDictWriter;

impl SwiftDictWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_to<W: Write>(&self, rows: &[TimezoneRow], mut output: W) -> Result<()> {
        for row in rows {
            writeln!(
                output,
                "\"{}\": ({}, {}),",
                row.tzid, row.latitude, row.longitude
            )?;
        }
        output.flush()?;
        Ok(())
    }
}

impl Default for SwiftDictWriter {
    fn default() -> Self {
        Self::new()
    }
}
