//! Tennis match database downloader and merger
//!
//! Fetches the yearly match CSVs of the Tennismylife (TML) database and
//! concatenates them into a single file.
//!
//! ## Features
//!
//! - **Fetch**: download `<year>.csv` for a range of years, skipping files already on disk
//! - **Merge**: concatenate the local year files in order, decoding each with an
//!   ordered list of candidate encodings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tml_data::{fetch::Fetcher, merge::{merge_years, MergeConfig}, Year, YearRange};
//!
//! # async fn example() -> tml_data::Result<()> {
//! let fetcher = Fetcher::new(
//!     reqwest::Client::new(),
//!     tml_data::fetch::DEFAULT_BASE_URL,
//!     "Data/OriginalCSVs",
//! );
//! let report = fetcher.fetch_range(YearRange::fetch_default()).await?;
//! println!("{} downloaded", report.downloaded());
//!
//! let mut config = MergeConfig::new("Data/OriginalCSVs", "Data");
//! config.years = YearRange::new(Year::new(1968), Year::new(2024))?;
//! println!("{}", merge_years(&config)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export TML_DATA_DIR=/srv/tennis/Data
//! export TML_BASE_URL=https://mirror.example/TML-Database/master
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fetch;
pub mod merge;

// Re-export commonly used types
pub use cli::types::{Encoding, Year, YearRange};
pub use error::{Result, TmlError};

pub const BASE_URL_ENV_VAR: &str = "TML_BASE_URL";
pub const DATA_DIR_ENV_VAR: &str = "TML_DATA_DIR";
