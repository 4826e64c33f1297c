use crate::error::Result;
use crate::models::NamedFeature;
use crate::utils::constants::{MEMBERSHIP_DELIMITER, UNASSIGNED_CLUB_CODE};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the uncurated membership file: every shapefile feature with club code 0.
/// Curators then change the code of the features the club tracks.
pub struct SeedWriter;

impl SeedWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_seed(&self, features: &[NamedFeature], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(features, BufWriter::new(file))
    }

    pub fn write_to<W: Write>(&self, features: &[NamedFeature], mut output: W) -> Result<()> {
        for feature in features {
            writeln!(
                output,
                "{code}{sep}{name}{sep}{kind}",
                code = UNASSIGNED_CLUB_CODE,
                sep = MEMBERSHIP_DELIMITER,
                name = feature.clean_name,
                kind = feature.feature_type
            )?;
        }
        output.flush()?;
        Ok(())
    }
}

impl Default for SeedWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::MembershipReader;

    fn feature(name: &str, kind: &str) -> NamedFeature {
        NamedFeature {
            clean_name: name.to_string(),
            feature_type: kind.to_string(),
        }
    }

    #[test]
    fn test_seed_lines_keep_full_type() -> Result<()> {
        let mut buffer = Vec::new();
        SeedWriter::new().write_to(
            &[feature("Abbot", "Crater"), feature("Rimae Plato", "Rima, rimae")],
            &mut buffer,
        )?;

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "0|Abbot|Crater\n0|Rimae Plato|Rima, rimae\n");

        // An uncurated seed selects nothing
        let membership = MembershipReader::new().parse_membership(&text)?;
        assert!(membership.is_empty());

        Ok(())
    }
}
