//! Lemma lookup.

use crate::error::{ExtractError, Result};
use crate::lemma::PosTag;
use log::info;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Finds the base form of a tagged surface form.
pub trait Lemmatizer: Send + Sync {
    /// Returns the lemma, or `None` if the form is unknown or the tag has no
    /// lemma rules.
    fn lemma(&self, surface: &str, tag: PosTag) -> Option<String>;
}

/// In-memory lemma dictionary keyed by tag and surface form.
#[derive(Debug, Clone, Default)]
pub struct LemmaTable {
    entries: HashMap<(PosTag, String), String>,
}

impl LemmaTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(surface, tag, lemma)` triples.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, PosTag, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (surface, tag, lemma) in entries {
            table.insert(surface, tag, lemma);
        }
        table
    }

    /// Loads a tab-separated `surface<TAB>tag<TAB>lemma` file.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut table = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(surface), Some(tag), Some(lemma)) if !surface.is_empty() && !lemma.is_empty() => {
                    table.insert(surface, PosTag::parse(tag), lemma);
                }
                _ => {
                    return Err(ExtractError::MalformedResource {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        reason: "expected surface, tag and lemma separated by tabs".to_string(),
                    });
                }
            }
        }

        info!("Loaded {} lemmata from {}", table.len(), path.display());
        Ok(table)
    }

    /// Adds an entry.
    pub fn insert(&mut self, surface: impl Into<String>, tag: PosTag, lemma: impl Into<String>) {
        self.entries.insert((tag, surface.into()), lemma.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(surface, tag)` pairs.
    pub fn surface_tags(&self) -> impl Iterator<Item = (&str, PosTag)> {
        self.entries.keys().map(|(tag, surface)| (surface.as_str(), *tag))
    }
}

impl Lemmatizer for LemmaTable {
    fn lemma(&self, surface: &str, tag: PosTag) -> Option<String> {
        if tag == PosTag::Other {
            return None;
        }
        self.entries
            .get(&(tag, surface.to_string()))
            .or_else(|| self.entries.get(&(tag, surface.to_lowercase())))
            .cloned()
    }
}
