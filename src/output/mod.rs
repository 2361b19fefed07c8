//! Files derived from an extraction result for password-cracking tools.

mod rules;
mod wordlist;

pub use rules::{RuleGenerator, BEST64_RULES, CASE_FUNCTIONS};
pub use wordlist::WordListGenerator;

use crate::error::Result;
use crate::storage::timestamped_path;
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A generated list written one entry per line.
pub trait LineOutput {
    /// File name prefix, followed by a timestamp.
    const PREFIX: &'static str;
    /// File extension.
    const EXTENSION: &'static str;

    /// The generated lines in output order.
    fn lines(&self) -> &[String];

    /// Writes all lines to `writer`.
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes a timestamped file into `dir`, creating it if missing.
    fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = timestamped_path(dir, Self::PREFIX, Self::EXTENSION);
        let mut writer = BufWriter::new(File::create(&path)?);
        self.write_to(&mut writer)?;
        info!("Wrote {} lines to {}", self.lines().len(), path.display());
        Ok(path)
    }
}
