//! Reading corpus files.
//!
//! A `.json` file holds an array of strings, one fragment each, so a post
//! may span several lines. Any other file is read one fragment per line.
//! Blank fragments are dropped in both layouts.

use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the fragments of a corpus file.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let fragments: Vec<String> = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        let fragments: Vec<String> = serde_json::from_reader(reader)?;
        fragments.into_iter().filter(|f| !f.trim().is_empty()).collect()
    } else {
        let mut fragments = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                fragments.push(line);
            }
        }
        fragments
    };

    debug!("Read {} fragments from {}", fragments.len(), path.display());
    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_keeps_multi_line_posts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"["Endlich Urlaub!\nReykjavík 2019", "  ", "Fernweh"]"#).unwrap();

        let fragments = read_corpus(&path).unwrap();
        assert_eq!(fragments, vec!["Endlich Urlaub!\nReykjavík 2019", "Fernweh"]);
    }

    #[test]
    fn test_plain_text_one_fragment_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.txt");
        fs::write(&path, "Endlich Urlaub!\n\nReykjavík 2019\n").unwrap();

        let fragments = read_corpus(&path).unwrap();
        assert_eq!(fragments, vec!["Endlich Urlaub!", "Reykjavík 2019"]);
    }

    #[test]
    fn test_json_not_an_array_of_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"{"text": "Fernweh"}"#).unwrap();

        let err = read_corpus(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Serialization(_)));
    }
}
