//! Persistence of extraction results and generated files.
//!
//! Everything for one case lives in `<root>/<case_id>/`, with a timestamp
//! in every file name so repeated runs never overwrite each other.

mod format;
mod snapshot;

pub use format::{SnapshotFormat, SnapshotHeader, VERSION};
pub use snapshot::SnapshotStore;

use crate::error::{ExtractError, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Timestamp layout used in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Formats `time` for use in a file name.
pub fn file_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns `<dir>/<prefix>_<timestamp>.<extension>`, adding a counter when a
/// file of that name already exists.
pub fn timestamped_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stamp = file_timestamp(&Local::now());
    let mut path = dir.join(format!("{}_{}.{}", prefix, stamp, extension));
    let mut counter = 1;
    while path.exists() {
        path = dir.join(format!("{}_{}_{}.{}", prefix, stamp, counter, extension));
        counter += 1;
    }
    path
}

/// Rejects case identifiers that are empty or would escape the output root.
pub fn validate_case_id(case_id: &str) -> Result<()> {
    let invalid = case_id.trim().is_empty()
        || case_id == "."
        || case_id == ".."
        || case_id.contains(['/', '\\'])
        || case_id.contains('\0');
    if invalid {
        return Err(ExtractError::Config(format!("invalid case id '{}'", case_id)));
    }
    Ok(())
}
