//! Sequential download of the per-year match files.
//!
//! Every year in a [`YearRange`] maps to `<base_url>/<year>.csv`. A year whose
//! local file already exists is skipped without touching the network; a
//! non-200 answer is reported and the run moves on to the next year.

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::{ensure_dir, write_atomic, year_file_path};
use crate::{Result, Year, YearRange};

/// Raw CSV root of the Tennismylife match database.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/Tennismylife/TML-Database/master";

/// What happened to a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    Downloaded { bytes: usize },
    Skipped,
    Failed { status: u16 },
}

/// Outcome of one year, as printed to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearFetch {
    pub year: Year,
    #[serde(flatten)]
    pub outcome: FetchOutcome,
}

impl fmt::Display for YearFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.year.file_name();
        match self.outcome {
            FetchOutcome::Downloaded { .. } => write!(f, "Downloaded {}", file),
            FetchOutcome::Skipped => write!(f, "Already exists, skipping: {}", file),
            FetchOutcome::Failed { .. } => write!(f, "Failed to download {}", file),
        }
    }
}

/// Per-year outcomes of a fetch run, in range order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchReport {
    pub results: Vec<YearFetch>,
}

impl FetchReport {
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, FetchOutcome::Downloaded { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FetchOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FetchOutcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&FetchOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Downloads `<year>.csv` files from `base_url` into `output_dir`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
    output_dir: PathBuf,
}

impl Fetcher {
    pub fn new(client: Client, base_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn year_url(&self, year: Year) -> String {
        format!("{}/{}", self.base_url, year.file_name())
    }

    /// Fetch one year unless its file is already present.
    ///
    /// Only a 200 response is written. Transport and filesystem errors are
    /// returned; a non-200 status is not an error.
    pub async fn fetch_year(&self, year: Year) -> Result<FetchOutcome> {
        let path = year_file_path(&self.output_dir, year);
        if path.exists() {
            debug!(year = %year, path = %path.display(), "already present");
            return Ok(FetchOutcome::Skipped);
        }

        let url = self.year_url(year);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!(%url, status = status.as_u16(), "download failed");
            return Ok(FetchOutcome::Failed {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        write_atomic(&path, &body)?;
        debug!(year = %year, bytes = body.len(), path = %path.display(), "saved");

        Ok(FetchOutcome::Downloaded { bytes: body.len() })
    }

    /// Fetch every year of `range` in ascending order, one request at a time.
    ///
    /// `on_year` sees each outcome as soon as it is known.
    pub async fn fetch_range_with<F>(&self, range: YearRange, mut on_year: F) -> Result<FetchReport>
    where
        F: FnMut(&YearFetch),
    {
        ensure_dir(&self.output_dir)?;
        info!(range = %range, dir = %self.output_dir.display(), "fetch run starting");

        let mut report = FetchReport::default();
        for year in range.iter() {
            let outcome = self.fetch_year(year).await?;
            let entry = YearFetch { year, outcome };
            on_year(&entry);
            report.results.push(entry);
        }

        info!(
            downloaded = report.downloaded(),
            skipped = report.skipped(),
            failed = report.failed(),
            "fetch run finished"
        );
        Ok(report)
    }

    pub async fn fetch_range(&self, range: YearRange) -> Result<FetchReport> {
        self.fetch_range_with(range, |_| {}).await
    }
}
