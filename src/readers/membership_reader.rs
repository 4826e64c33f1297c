use crate::error::{ProcessingError, Result};
use crate::models::{ClubCode, Membership, MembershipEntry};
use crate::utils::constants::{MEMBERSHIP_DELIMITER, UNASSIGNED_CLUB_CODE};
use crate::utils::TextDecoding;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the pipe-delimited club list: `<club code>|<name>|<type>|<observing code>`
pub struct MembershipReader {
    decoding: TextDecoding,
}

impl MembershipReader {
    pub fn new() -> Self {
        Self {
            decoding: TextDecoding::default(),
        }
    }

    pub fn with_decoding(decoding: TextDecoding) -> Self {
        Self { decoding }
    }

    pub fn read_membership(&self, path: &Path) -> Result<Membership> {
        let text = self.decoding.read_to_string(path)?;
        self.parse_membership(&text)
    }

    pub fn parse_membership(&self, text: &str) -> Result<Membership> {
        let mut membership = Membership::new();
        let mut unassigned = 0usize;

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.parse_line(line, index + 1)? {
                Some(entry) => {
                    if let Some(previous) = membership.insert(entry) {
                        warn!(
                            "Line {}: '{}' listed more than once, keeping the later entry",
                            index + 1,
                            previous.name
                        );
                    }
                }
                None => unassigned += 1,
            }
        }

        debug!(
            "Membership list has {} club features, {} unassigned lines",
            membership.len(),
            unassigned
        );

        Ok(membership)
    }

    /// Parse one line; unassigned (code 0) lines yield `None`
    fn parse_line(&self, line: &str, line_number: usize) -> Result<Option<MembershipEntry>> {
        let parts: Vec<&str> = line.split(MEMBERSHIP_DELIMITER).map(str::trim).collect();

        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format!(
                "Line {}: expected '<code>|<name>', got '{}'",
                line_number, line
            )));
        }

        let code = parts[0].parse::<i64>().map_err(|_| {
            ProcessingError::InvalidFormat(format!(
                "Line {}: invalid club code '{}'",
                line_number, parts[0]
            ))
        })?;

        let name = parts[1];
        if name.is_empty() {
            return Err(ProcessingError::MissingData(format!(
                "Line {}: feature name",
                line_number
            )));
        }

        if code == UNASSIGNED_CLUB_CODE {
            return Ok(None);
        }

        let club = ClubCode::from_code(code).ok_or_else(|| ProcessingError::InvalidClubCode {
            name: name.to_string(),
            code,
            line: line_number,
        })?;

        let observing_code = match parts.get(3) {
            None | Some(&"") => None,
            Some(value) => Some(value.parse::<i64>().map_err(|_| {
                ProcessingError::InvalidFormat(format!(
                    "Line {}: invalid observing type code '{}'",
                    line_number, value
                ))
            })?),
        };

        Ok(Some(MembershipEntry::new(
            name.to_string(),
            club,
            observing_code,
        )))
    }
}

impl Default for MembershipReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObservingType;
    use crate::utils::constants::DEFAULT_OBSERVING_CODE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_with_observing_code() {
        let reader = MembershipReader::new();
        let entry = reader.parse_line("1|Tycho|Crater|0", 1).unwrap().unwrap();

        assert_eq!(entry.name, "Tycho");
        assert_eq!(entry.club, ClubCode::Lunar);
        assert_eq!(entry.observing_code, 0);
        assert_eq!(entry.observing_type(), Some(ObservingType::NakedEye));
    }

    #[test]
    fn test_parse_line_without_observing_code() {
        let reader = MembershipReader::new();
        let entry = reader.parse_line("2|Plato|Crater", 1).unwrap().unwrap();

        assert_eq!(entry.club, ClubCode::LunarII);
        assert_eq!(entry.observing_code, DEFAULT_OBSERVING_CODE);
        assert_eq!(entry.observing_type(), None);
    }

    #[test]
    fn test_unassigned_line_is_skipped() {
        let reader = MembershipReader::new();
        assert!(reader.parse_line("0|Abbot|Crater", 1).unwrap().is_none());
    }

    #[test]
    fn test_out_of_range_club_code_is_rejected() {
        let reader = MembershipReader::new();
        let err = reader.parse_line("4|Kepler|Crater|2", 7).unwrap_err();

        match err {
            ProcessingError::InvalidClubCode { name, code, line } => {
                assert_eq!(name, "Kepler");
                assert_eq!(code, 4);
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(reader.parse_line("-1|Kepler|Crater", 1).is_err());
    }

    #[test]
    fn test_out_of_range_observing_code_is_kept_without_type() {
        let reader = MembershipReader::new();
        let entry = reader.parse_line("3|Grimaldi|Crater|9", 1).unwrap().unwrap();

        assert_eq!(entry.club, ClubCode::Both);
        assert_eq!(entry.observing_type(), None);
    }

    #[test]
    fn test_malformed_lines() {
        let reader = MembershipReader::new();
        assert!(reader.parse_line("Tycho", 1).is_err());
        assert!(reader.parse_line("x|Tycho|Crater", 1).is_err());
        assert!(reader.parse_line("1||Crater", 1).is_err());
        assert!(reader.parse_line("1|Tycho|Crater|two", 1).is_err());
    }

    #[test]
    fn test_read_membership_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "0|Abbot|Crater")?;
        writeln!(file, "1|Copernicus|Crater|1")?;
        writeln!(file)?;
        writeln!(file, "3|Mare Crisium|Mare|0")?;
        file.write_all(b"2|Kies \xff Pi|Dome\n")?;

        let membership = MembershipReader::new().read_membership(file.path())?;

        assert_eq!(membership.len(), 3);
        assert!(membership.contains("Copernicus"));
        assert!(membership.contains("Mare Crisium"));
        assert!(membership.contains("Kies  Pi"));
        assert!(!membership.contains("Abbot"));

        Ok(())
    }

    #[test]
    fn test_strict_decoding_rejects_bad_bytes() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"1|Mo\xffon|Crater\n")?;

        let reader = MembershipReader::with_decoding(TextDecoding::new("utf-8", false));
        assert!(reader.read_membership(file.path()).is_err());

        Ok(())
    }
}
