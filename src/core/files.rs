//! File system helpers for the year-named CSV store

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Result, TmlError, Year};

/// Path: {dir}/{year}.csv
pub fn year_file_path(dir: &Path, year: Year) -> PathBuf {
    dir.join(year.file_name())
}

/// Read a whole file, tagging failures with the path.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| TmlError::file(path, e))
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| TmlError::file(dir, e))
}

/// Sibling path used while a file is being written.
pub fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Write `contents` to `{path}.part`, then rename over `path`.
///
/// A crash mid-write leaves only the `.part` file, never a truncated `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let part = part_path(path);
    let mut f = fs::File::create(&part).map_err(|e| TmlError::file(&part, e))?;
    f.write_all(contents).map_err(|e| TmlError::file(&part, e))?;
    f.sync_all().map_err(|e| TmlError::file(&part, e))?;
    drop(f);

    fs::rename(&part, path).map_err(|e| {
        let _ = fs::remove_file(&part);
        TmlError::file(path, e)
    })
}
