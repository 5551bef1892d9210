//! Candidate text encodings for the per-year CSV files.

use crate::error::TmlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Character encodings a source file may be written in.
///
/// Older seasons of the match database contain player names that are not
/// valid UTF-8, so files are decoded against an ordered list of candidates.
///
/// # Examples
///
/// ```rust
/// use tml_data::Encoding;
///
/// let bytes = b"Ren\xe9";
/// assert!(Encoding::Utf8.decode(bytes).is_none());
/// assert_eq!(Encoding::Latin1.decode(bytes).unwrap(), "René");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "latin1")]
    Latin1,
}

impl Encoding {
    /// Default candidates: strict UTF-8, then Latin-1.
    pub fn default_candidates() -> Vec<Encoding> {
        vec![Encoding::Utf8, Encoding::Latin1]
    }

    /// Decode `bytes`, returning `None` when they are not valid in this encoding.
    ///
    /// A leading UTF-8 byte-order mark is dropped. Latin-1 maps every byte to
    /// the code point of the same value and never fails.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                String::from_utf8(bytes.to_vec()).ok()
            }
            Encoding::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// Try each candidate in order and return the first successful decoding.
pub fn decode_with_fallback(bytes: &[u8], encodings: &[Encoding]) -> Option<(Encoding, String)> {
    encodings
        .iter()
        .find_map(|enc| enc.decode(bytes).map(|text| (*enc, text)))
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin1",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Encoding {
    type Err = TmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Encoding::Latin1),
            _ => Err(TmlError::UnknownEncoding {
                name: s.to_string(),
            }),
        }
    }
}
