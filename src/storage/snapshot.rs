//! Snapshot store keyed by case identifier.

use crate::error::{ExtractError, Result};
use crate::result::ExtractionResult;
use crate::storage::{timestamped_path, validate_case_id, SnapshotFormat};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const PREFIX: &str = "expressions";
const BINARY_EXTENSION: &str = "bin";
const TEXT_EXTENSION: &str = "txt";

/// Stores extraction results under `<root>/<case_id>/`.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Creates a store rooted at `root`. Nothing is created on disk yet.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a case.
    pub fn case_dir(&self, case_id: &str) -> Result<PathBuf> {
        validate_case_id(case_id)?;
        Ok(self.root.join(case_id))
    }

    /// Directory of a case, created if missing.
    pub fn ensure_case_dir(&self, case_id: &str) -> Result<PathBuf> {
        let dir = self.case_dir(case_id)?;
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Writes a binary snapshot and returns its path.
    pub fn save(&self, case_id: &str, result: &ExtractionResult) -> Result<PathBuf> {
        let dir = self.ensure_case_dir(case_id)?;
        let path = timestamped_path(&dir, PREFIX, BINARY_EXTENSION);
        SnapshotFormat::write(&path, result)?;
        info!(
            "Saved snapshot with {} words and {} numbers to {}",
            result.words.len(),
            result.numbers.len(),
            path.display()
        );
        Ok(path)
    }

    /// Writes a human-readable snapshot, one record per line, words first.
    pub fn save_text(&self, case_id: &str, result: &ExtractionResult) -> Result<PathBuf> {
        let dir = self.ensure_case_dir(case_id)?;
        let path = timestamped_path(&dir, PREFIX, TEXT_EXTENSION);

        let mut writer = BufWriter::new(File::create(&path)?);
        for word in &result.words {
            writeln!(writer, "{}", word)?;
        }
        for number in &result.numbers {
            writeln!(writer, "{}", number)?;
        }
        writer.flush()?;

        info!("Saved text snapshot to {}", path.display());
        Ok(path)
    }

    /// Reads a binary snapshot.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
        let path = path.as_ref();
        debug!("Loading snapshot {}", path.display());
        SnapshotFormat::read(path)
    }

    /// Path of the newest binary snapshot of a case, if any.
    pub fn latest(&self, case_id: &str) -> Result<Option<PathBuf>> {
        let dir = self.case_dir(case_id)?;
        if !dir.is_dir() {
            return Ok(None);
        }

        let newest = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_binary_snapshot(path))
            .max_by(|a, b| snapshot_order(a).cmp(&snapshot_order(b)));
        Ok(newest)
    }

    /// Loads the newest binary snapshot of a case.
    pub fn load_latest(&self, case_id: &str) -> Result<ExtractionResult> {
        match self.latest(case_id)? {
            Some(path) => Self::load(path),
            None => Err(ExtractError::SnapshotNotFound(self.case_dir(case_id)?)),
        }
    }
}

fn is_binary_snapshot(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    name.starts_with(PREFIX) && path.extension().is_some_and(|ext| ext == BINARY_EXTENSION)
}

/// Sort key: the timestamp, then the collision counter.
fn snapshot_order(path: &Path) -> (String, u32) {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let rest = stem.strip_prefix(PREFIX).unwrap_or(stem).trim_start_matches('_');
    // <date>_<time>[_<counter>]
    let mut parts = rest.splitn(3, '_');
    let date = parts.next().unwrap_or_default();
    let time = parts.next().unwrap_or_default();
    let counter = parts.next().and_then(|c| c.parse().ok()).unwrap_or(0);
    (format!("{}_{}", date, time), counter)
}
