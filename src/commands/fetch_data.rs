//! Fetch command implementation

use std::path::PathBuf;

use reqwest::Client;

use crate::{
    fetch::{FetchReport, Fetcher},
    Result, YearRange,
};

/// Parameters for the fetch command
#[derive(Debug, Clone)]
pub struct FetchDataParams {
    pub base_url: String,
    pub data_dir: PathBuf,
    pub years: YearRange,
    pub as_json: bool,
}

/// Handle the fetch command
pub async fn handle_fetch_data(params: FetchDataParams) -> Result<FetchReport> {
    let fetcher = Fetcher::new(Client::new(), params.base_url, params.data_dir);
    let as_json = params.as_json;

    // tarpaulin::skip - console output
    let report = fetcher
        .fetch_range_with(params.years, |entry| {
            if !as_json {
                println!("{}", entry);
            }
        })
        .await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}
