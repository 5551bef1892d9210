//! Merge the per-year CSV files into one table.
//!
//! - `table`: loading with encoding fallback, concatenation, serialization

pub mod table;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::cli::types::Encoding;
use crate::core::year_file_path;
use crate::{Result, Year, YearRange};

pub use table::{concat, load_table, rename_duplicate_headers, write_table, LoadedTable, Table};

/// Name of the merged file, kept stable whatever range is merged.
pub const MERGED_FILE_NAME: &str = "merged1968_2024.csv";

/// Inputs of a merge run.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub output_name: String,
    pub years: YearRange,
    pub encodings: Vec<Encoding>,
}

impl MergeConfig {
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            output_name: MERGED_FILE_NAME.to_string(),
            years: YearRange::merge_default(),
            encodings: Encoding::default_candidates(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.dest_dir.join(&self.output_name)
    }
}

/// Summary of a finished merge.
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub years: YearRange,
    pub files: usize,
    pub rows: usize,
    pub columns: Vec<String>,
    /// Years that needed a fallback encoding.
    pub fallback_years: Vec<Year>,
    pub output: PathBuf,
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Merged {} files ({}) into {}.",
            self.files,
            self.years,
            self.output.display()
        )
    }
}

/// Load `<source_dir>/<year>.csv` for every year, concatenate in year order
/// and write the result to [`MergeConfig::output_path`].
///
/// Any missing file, undecodable file or malformed CSV aborts the run before
/// the output is touched.
pub fn merge_years(config: &MergeConfig) -> Result<MergeReport> {
    info!(
        range = %config.years,
        source = %config.source_dir.display(),
        "merge run starting"
    );

    let mut tables = Vec::with_capacity(config.years.len());
    let mut fallback_years = Vec::new();
    for year in config.years.iter() {
        let path = year_file_path(&config.source_dir, year);
        let loaded = load_table(&path, &config.encodings)?;
        if Some(&loaded.encoding) != config.encodings.first() {
            fallback_years.push(year);
        }
        tables.push(loaded.table);
    }

    let files = tables.len();
    let merged = concat(tables);
    let output = config.output_path();
    write_table(&merged, &output)?;

    info!(
        files,
        rows = merged.len(),
        output = %output.display(),
        "merge run finished"
    );

    Ok(MergeReport {
        years: config.years,
        files,
        rows: merged.len(),
        columns: merged.headers,
        fallback_years,
        output,
    })
}
