//! Core utilities shared by the fetch and merge pipelines
//!
//! - `files`: year-named file paths and atomic writes
//! - `logging`: tracing subscriber setup

pub mod files;
pub mod logging;

pub use files::{ensure_dir, read_bytes, write_atomic, year_file_path};
pub use logging::init_tracing;
