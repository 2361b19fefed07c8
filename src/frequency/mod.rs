//! General-language word frequency resources.
//!
//! A [`FrequencySource`] tells how common a term is in everyday use of a
//! language. The exceptionalism scorer inverts that into a rarity value.
//!
//! [`WordFreqLexicon::bundled`] ships the large English and German models;
//! `<code>.tsv` tables add other languages or replace a bundled one.

use crate::error::{ExtractError, ResourceKind, Result};
use crate::language::LanguageCode;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use wordfreq::WordFreq;
use wordfreq_model::{load_wordfreq, ModelKind};

/// Looks up the commonness of a term in a language.
pub trait FrequencySource: Send + Sync {
    /// Returns the share of `term` in general usage of `language`, 0 for
    /// unknown terms.
    ///
    /// Fails with [`ExtractError::ResourceUnavailable`] when there is no
    /// table for the language at all.
    fn commonness(&self, term: &str, language: &LanguageCode) -> Result<f64>;
}

/// Language codes of the models compiled into the binary.
const BUNDLED_MODELS: [(&str, ModelKind); 2] = [("en", ModelKind::LargeEn), ("de", ModelKind::LargeDe)];

/// Frequency tables per language backed by `wordfreq`.
#[derive(Default)]
pub struct WordFreqLexicon {
    tables: HashMap<String, WordFreq>,
}

impl WordFreqLexicon {
    /// Creates a lexicon without any tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the table for a language code, replacing any previous one.
    pub fn insert(&mut self, language: impl Into<String>, table: WordFreq) {
        self.tables.insert(language.into(), table);
    }

    /// Adds a table built from `(word, weight)` pairs.
    pub fn insert_weights<I, W>(&mut self, language: impl Into<String>, weights: I)
    where
        I: IntoIterator<Item = (W, f32)>,
        W: AsRef<str>,
    {
        self.insert(language, WordFreq::new(weights));
    }

    /// Creates a lexicon with the bundled large models for `en` and `de`.
    pub fn bundled() -> Result<Self> {
        let mut lexicon = Self::new();
        for (code, kind) in BUNDLED_MODELS {
            let table = load_wordfreq(kind)
                .map_err(|e| ExtractError::Serialization(format!("bundled '{}' frequency model: {}", code, e)))?;
            lexicon.insert(code, table);
        }
        debug!("Loaded bundled frequency models: {:?}", lexicon.languages());
        Ok(lexicon)
    }

    /// Loads every `<code>.tsv` file of a directory into an empty lexicon.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut lexicon = Self::new();
        lexicon.extend_from_dir(dir)?;
        Ok(lexicon)
    }

    /// Adds every `<code>.tsv` file of a directory, replacing tables of the
    /// same code. Returns the number of files read.
    ///
    /// Each line is `word<TAB>weight`; blank lines and `#` comments are
    /// skipped.
    pub fn extend_from_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize> {
        let dir = dir.as_ref();

        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "tsv"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let weights = read_weights(&path)?;
            debug!("Frequency table '{}': {} words", code, weights.len());
            self.insert_weights(code.to_string(), weights);
            loaded += 1;
        }

        info!("Loaded {} frequency tables from {}", loaded, dir.display());
        Ok(loaded)
    }

    /// Language codes with a table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    fn table(&self, language: &LanguageCode) -> Option<&WordFreq> {
        self.tables.get(language.as_str()).or_else(|| {
            language
                .alternate()
                .and_then(|alt| self.tables.get(alt.as_str()))
        })
    }
}

impl std::fmt::Debug for WordFreqLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordFreqLexicon")
            .field("languages", &self.languages())
            .finish()
    }
}

impl FrequencySource for WordFreqLexicon {
    fn commonness(&self, term: &str, language: &LanguageCode) -> Result<f64> {
        let table = self
            .table(language)
            .ok_or_else(|| ExtractError::ResourceUnavailable {
                kind: ResourceKind::Frequency,
                language: language.to_string(),
            })?;
        Ok(f64::from(table.word_frequency(term)))
    }
}

fn read_weights(path: &Path) -> Result<Vec<(String, f32)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut weights = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason: &str| ExtractError::MalformedResource {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: reason.to_string(),
        };

        let (word, weight) = line
            .split_once('\t')
            .ok_or_else(|| malformed("expected word and weight separated by a tab"))?;
        let weight: f32 = weight
            .trim()
            .parse()
            .map_err(|_| malformed("weight is not a number"))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(malformed("weight must be a non-negative number"));
        }

        weights.push((word.to_string(), weight));
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn lexicon() -> WordFreqLexicon {
        let mut lexicon = WordFreqLexicon::new();
        lexicon.insert_weights("en", [("the", 100.0), ("cat", 10.0), ("sat", 5.0)]);
        lexicon
    }

    #[test]
    fn test_relative_commonness() {
        let lexicon = lexicon();
        let en = LanguageCode::from("en");
        let the = lexicon.commonness("the", &en).unwrap();
        let cat = lexicon.commonness("cat", &en).unwrap();
        let sat = lexicon.commonness("sat", &en).unwrap();

        assert!(the > cat);
        assert!(cat > sat);
        assert!(sat > 0.0);
        assert_eq!(lexicon.commonness("zyzzyva", &en).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_language() {
        let lexicon = lexicon();
        let err = lexicon.commonness("hund", &LanguageCode::from("de")).unwrap_err();
        assert!(err.is_resource_unavailable());
    }

    #[test]
    fn test_alternate_code() {
        let lexicon = lexicon();
        assert!(lexicon.commonness("cat", &LanguageCode::from("eng")).unwrap() > 0.0);
    }

    #[test]
    fn test_load_dir() {
        let dir = tempdir().unwrap();
        let mut file = File::create(dir.path().join("de.tsv")).unwrap();
        writeln!(file, "# word\tweight").unwrap();
        writeln!(file, "und\t50").unwrap();
        writeln!(file, "hund\t2.5").unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let lexicon = WordFreqLexicon::load_dir(dir.path()).unwrap();
        assert_eq!(lexicon.languages(), vec!["de"]);

        let de = LanguageCode::from("de");
        assert!(lexicon.commonness("und", &de).unwrap() > lexicon.commonness("hund", &de).unwrap());
    }

    #[test]
    fn test_bundled_models() {
        let lexicon = WordFreqLexicon::bundled().unwrap();
        assert_eq!(lexicon.languages(), vec!["de", "en"]);

        let en = LanguageCode::from("en");
        let the = lexicon.commonness("the", &en).unwrap();
        let guitar = lexicon.commonness("guitar", &en).unwrap();
        let xylophone = lexicon.commonness("xylophone", &en).unwrap();
        assert!(the > guitar);
        assert!(guitar > xylophone);

        let de = LanguageCode::from("deu");
        assert!(lexicon.commonness("und", &de).unwrap() > lexicon.commonness("murmeltier", &de).unwrap());
    }

    #[test]
    fn test_dir_tables_extend_bundled() {
        let dir = tempdir().unwrap();
        let mut file = File::create(dir.path().join("sv.tsv")).unwrap();
        writeln!(file, "och\t80").unwrap();
        writeln!(file, "murmeldjur\t1").unwrap();
        let mut file = File::create(dir.path().join("en.tsv")).unwrap();
        writeln!(file, "xylophone\t10").unwrap();

        let mut lexicon = WordFreqLexicon::bundled().unwrap();
        assert_eq!(lexicon.extend_from_dir(dir.path()).unwrap(), 2);
        assert_eq!(lexicon.languages(), vec!["de", "en", "sv"]);

        let sv = LanguageCode::from("sv");
        assert!(lexicon.commonness("och", &sv).unwrap() > lexicon.commonness("murmeldjur", &sv).unwrap());
        let en = LanguageCode::from("en");
        assert_eq!(lexicon.commonness("the", &en).unwrap(), 0.0);
        assert!(lexicon.commonness("xylophone", &en).unwrap() > 0.0);
    }

    #[test]
    fn test_load_dir_malformed() {
        let dir = tempdir().unwrap();
        let mut file = File::create(dir.path().join("en.tsv")).unwrap();
        writeln!(file, "cat\tmany").unwrap();

        let err = WordFreqLexicon::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedResource { line: 1, .. }));
    }
}
