//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Encoding, Year};

/// Where the per-year files live, shared by every command.
#[derive(Debug, Args)]
pub struct DataDirs {
    /// Directory of `<year>.csv` files (or set `TML_DATA_DIR`; default `Data/OriginalCSVs`).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// First year to download.
    #[clap(long, default_value_t = Year::new(types::year::FIRST_YEAR))]
    pub start: Year,

    /// Last year to download (inclusive).
    #[clap(long, default_value_t = Year::new(types::year::LAST_FETCH_YEAR))]
    pub end: Year,

    /// Base URL the `<year>.csv` files are fetched from (or set `TML_BASE_URL`).
    #[clap(long)]
    pub base_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// First year to merge.
    #[clap(long, default_value_t = Year::new(types::year::FIRST_YEAR))]
    pub start: Year,

    /// Last year to merge (inclusive).
    #[clap(long, default_value_t = Year::new(types::year::LAST_MERGE_YEAR))]
    pub end: Year,

    /// Directory the merged file is written to (default: parent of the data dir).
    #[clap(long)]
    pub dest_dir: Option<PathBuf>,

    /// Merged file name.
    #[clap(long, short, default_value = crate::merge::MERGED_FILE_NAME)]
    pub output: String,

    /// Candidate encodings, tried in order (repeatable): `-e utf-8 -e latin1`.
    #[clap(long = "encoding", short = 'e')]
    pub encodings: Option<Vec<Encoding>>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download `<year>.csv` for each year, skipping files already on disk.
    Fetch {
        #[clap(flatten)]
        dirs: DataDirs,

        #[clap(flatten)]
        args: FetchArgs,

        /// Print the run report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Concatenate the local year files into one CSV.
    Merge {
        #[clap(flatten)]
        dirs: DataDirs,

        #[clap(flatten)]
        args: MergeArgs,

        /// Print the run report as JSON instead of the summary line.
        #[clap(long)]
        json: bool,
    },

    /// Fetch with the default fetch range, then merge with the default merge range.
    Update {
        #[clap(flatten)]
        dirs: DataDirs,

        /// Base URL the `<year>.csv` files are fetched from (or set `TML_BASE_URL`).
        #[clap(long)]
        base_url: Option<String>,

        /// Directory the merged file is written to (default: parent of the data dir).
        #[clap(long)]
        dest_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "tml-data", about = "Download and merge the TML tennis match database")]
pub struct Tml {
    /// Log progress details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
