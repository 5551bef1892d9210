//! Update command: fetch, then merge

use std::path::PathBuf;

use crate::{
    fetch::FetchReport,
    merge::{MergeConfig, MergeReport},
    Result, YearRange,
};

use super::{
    fetch_data::{handle_fetch_data, FetchDataParams},
    merge_data::handle_merge_data,
};

/// Run a default fetch followed by a default merge over the same directory.
pub async fn handle_update_data(
    base_url: String,
    data_dir: PathBuf,
    dest_dir: PathBuf,
) -> Result<(FetchReport, MergeReport)> {
    let fetched = handle_fetch_data(FetchDataParams {
        base_url,
        data_dir: data_dir.clone(),
        years: YearRange::fetch_default(),
        as_json: false,
    })
    .await?;

    let config = MergeConfig::new(data_dir, dest_dir);
    let merged = handle_merge_data(&config, false)?;

    Ok((fetched, merged))
}
