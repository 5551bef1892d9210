//! Year types naming the per-season match files.

use crate::error::{Result, TmlError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First season covered by the match database.
pub const FIRST_YEAR: u16 = 1968;
/// Last season fetched by default (may still be in progress upstream).
pub const LAST_FETCH_YEAR: u16 = 2025;
/// Last season merged by default.
pub const LAST_MERGE_YEAR: u16 = 2024;

/// Type-safe wrapper for a season year.
///
/// A year names both the remote resource and the local file.
///
/// # Examples
///
/// ```rust
/// use tml_data::Year;
///
/// let year = Year::new(1968);
/// assert_eq!(year.file_name(), "1968.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub u16);

impl Year {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// File name used both remotely and locally: `<year>.csv`.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = TmlError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of years, always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    pub fn new(start: Year, end: Year) -> Result<Self> {
        if start > end {
            return Err(TmlError::InvalidYearRange {
                start: start.as_u16(),
                end: end.as_u16(),
            });
        }
        Ok(Self { start, end })
    }

    /// Default range for downloads.
    pub fn fetch_default() -> Self {
        Self {
            start: Year(FIRST_YEAR),
            end: Year(LAST_FETCH_YEAR),
        }
    }

    /// Default range for merging.
    pub fn merge_default() -> Self {
        Self {
            start: Year(FIRST_YEAR),
            end: Year(LAST_MERGE_YEAR),
        }
    }

    pub fn start(&self) -> Year {
        self.start
    }

    pub fn end(&self) -> Year {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Years in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Year> {
        (self.start.0..=self.end.0).map(Year)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}
