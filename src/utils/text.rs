use crate::error::{ProcessingError, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// How raw bytes read from input files are turned into text.
///
/// Lossy decoding drops undecodable sequences instead of failing, so a stray
/// Latin-1 byte in a hand-edited file does not abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDecoding {
    pub encoding: String,
    pub lossy: bool,
}

impl TextDecoding {
    pub fn new(encoding: &str, lossy: bool) -> Self {
        Self {
            encoding: encoding.to_string(),
            lossy,
        }
    }

    pub fn encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.as_bytes()).ok_or_else(|| {
            ProcessingError::Encoding(format!("Unknown text encoding label: '{}'", self.encoding))
        })
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let encoding = self.encoding()?;
        let (text, _, had_errors) = encoding.decode(bytes);

        if !had_errors {
            return Ok(text.into_owned());
        }

        if self.lossy {
            warn!(
                "Dropped undecodable bytes while reading {} text",
                encoding.name()
            );
            Ok(text.chars().filter(|c| *c != char::REPLACEMENT_CHARACTER).collect())
        } else {
            Err(ProcessingError::Encoding(format!(
                "Input is not valid {}",
                encoding.name()
            )))
        }
    }

    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        self.decode(&bytes)
    }
}

impl Default for TextDecoding {
    fn default() -> Self {
        Self::new("utf-8", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let policy = TextDecoding::default();
        assert_eq!(policy.decode("Mädler".as_bytes()).unwrap(), "Mädler");
    }

    #[test]
    fn test_lossy_drops_invalid_bytes() {
        let policy = TextDecoding::new("utf-8", true);
        let bytes = b"Kies \xff Pi";
        assert_eq!(policy.decode(bytes).unwrap(), "Kies  Pi");
    }

    #[test]
    fn test_strict_rejects_invalid_bytes() {
        let policy = TextDecoding::new("utf-8", false);
        assert!(policy.decode(b"Kies \xff Pi").is_err());
    }

    #[test]
    fn test_latin1_label() {
        let policy = TextDecoding::new("latin1", false);
        assert_eq!(policy.decode(b"M\xe4dler").unwrap(), "Mädler");
    }

    #[test]
    fn test_unknown_label() {
        let policy = TextDecoding::new("klingon", true);
        assert!(policy.decode(b"abc").is_err());
    }
}
