//! Merge command implementation

use crate::{
    merge::{merge_years, MergeConfig, MergeReport},
    Result,
};

/// Handle the merge command
pub fn handle_merge_data(config: &MergeConfig, as_json: bool) -> Result<MergeReport> {
    let report = merge_years(config)?;

    // tarpaulin::skip - console output
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(report)
}
