//! Command implementations for the tml-data CLI

pub mod fetch_data;
pub mod merge_data;
pub mod update_data;

use std::path::{Path, PathBuf};

use crate::{fetch::DEFAULT_BASE_URL, BASE_URL_ENV_VAR, DATA_DIR_ENV_VAR};

/// Default location of the downloaded year files.
pub const DEFAULT_DATA_DIR: &str = "Data/OriginalCSVs";

/// Resolve the base URL from option, then environment variable, then default.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Resolve the year-file directory from option, then environment variable, then default.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| {
            std::env::var_os(DATA_DIR_ENV_VAR)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// The merged file goes next to the data directory unless told otherwise.
pub fn resolve_dest_dir(dest_dir: Option<PathBuf>, data_dir: &Path) -> PathBuf {
    dest_dir.unwrap_or_else(|| match data_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    })
}
