//! Part-of-speech tagging for lemma lookup.

use crate::lemma::LemmaTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coarse word class used to select a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Noun or proper noun.
    Noun,
    /// Verb of any kind.
    Verb,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Anything the lemmatizer has no rules for.
    Other,
}

impl PosTag {
    /// Parses a tag.
    ///
    /// Accepts the coarse names (`N`, `V`, `ADJ`, `ADV`) and STTS tags
    /// (`NN`, `NE`, `VVFIN`, `VAINF`, `ADJA`, `ADJD`, ...). Anything else is
    /// [`PosTag::Other`].
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_uppercase();
        if tag.starts_with("ADJ") {
            PosTag::Adjective
        } else if tag.starts_with("ADV") {
            PosTag::Adverb
        } else if tag.starts_with('N') {
            PosTag::Noun
        } else if tag.starts_with('V') {
            PosTag::Verb
        } else {
            PosTag::Other
        }
    }
}

/// Assigns a part-of-speech tag to every token of a sentence.
pub trait PosTagger: Send + Sync {
    /// Returns one tag per token, in order.
    fn tag(&self, tokens: &[&str]) -> Vec<PosTag>;
}

/// Dictionary tagger.
///
/// Known surface forms get their recorded tag. Unknown capitalized tokens
/// are tagged as nouns, which holds for German orthography; the rest are
/// [`PosTag::Other`].
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    lexicon: HashMap<String, PosTag>,
}

impl LexiconTagger {
    /// Creates a tagger with an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the surface forms of a lemma table as lexicon.
    ///
    /// A form listed under several tags keeps the first in declaration
    /// order of [`PosTag`].
    pub fn from_table(table: &LemmaTable) -> Self {
        let mut lexicon: HashMap<String, PosTag> = HashMap::new();
        for (surface, tag) in table.surface_tags() {
            lexicon
                .entry(surface.to_string())
                .and_modify(|existing| *existing = (*existing).min(tag))
                .or_insert(tag);
        }
        Self { lexicon }
    }

    /// Adds or replaces a lexicon entry.
    pub fn insert(&mut self, surface: impl Into<String>, tag: PosTag) {
        self.lexicon.insert(surface.into(), tag);
    }

    fn tag_token(&self, token: &str) -> PosTag {
        if let Some(&tag) = self.lexicon.get(token) {
            return tag;
        }
        if let Some(&tag) = self.lexicon.get(&token.to_lowercase()) {
            return tag;
        }
        match token.chars().next() {
            Some(first) if first.is_uppercase() => PosTag::Noun,
            _ => PosTag::Other,
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<PosTag> {
        tokens.iter().map(|token| self.tag_token(token)).collect()
    }
}
