//! Error types for the TML data pipeline

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TmlError>;

#[derive(Error, Debug)]
pub enum TmlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: u16, end: u16 },

    #[error("Unknown encoding: {name}")]
    UnknownEncoding { name: String },

    #[error("No candidate encodings configured")]
    NoEncodings,

    #[error("Could not decode {} with any of: {tried}", path.display())]
    Decode { path: PathBuf, tried: String },

    #[error("{} has no header row", path.display())]
    EmptyFile { path: PathBuf },

    #[error("{} line {line}: expected at most {expected} fields, found {found}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TmlError {
    /// Attach the offending path to an IO error.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TmlError::File {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests;
