//! The extraction pipeline.
//!
//! Fragments are classified, normalized, optionally lemmatized, tokenized
//! and aggregated independently of each other, in parallel when enabled.
//! The scoring phases then run over the whole aggregate.

use crate::aggregate::{Aggregate, FragmentTokens};
use crate::config::Config;
use crate::error::{ExtractError, Result};
use crate::frequency::FrequencySource;
use crate::language::{resolve_language, LanguageClassifier, LanguageCode};
use crate::lemma::Lemmatization;
use crate::result::ExtractionResult;
use crate::scoring::{
    check_cancelled, combine_scores, dedupe_false_friends, rank_numbers, rank_words, score_exceptionalism,
    score_frequency,
};
use crate::text::{separate_numbers, Normalizer, StopwordRegistry, Tokenizer};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

/// A fragment with its resolved language.
struct Classified<'a> {
    text: &'a str,
    language: LanguageCode,
    language_name: String,
}

/// Turns a corpus of fragments into ranked words and numbers.
///
/// All resources are owned by the extractor; it holds no global state and
/// can be shared between threads.
pub struct ExpressionExtractor {
    config: Config,
    classifier: Box<dyn LanguageClassifier>,
    frequency: Box<dyn FrequencySource>,
    lemmatization: Option<Lemmatization>,
    cancel: Option<Arc<AtomicBool>>,
    normalizer: Normalizer,
    tokenizer: Tokenizer,
    expected: LanguageCode,
    expected_name: String,
}

impl ExpressionExtractor {
    /// Creates an extractor after validating `config`.
    pub fn new(
        config: Config,
        classifier: Box<dyn LanguageClassifier>,
        frequency: Box<dyn FrequencySource>,
    ) -> Result<Self> {
        config.validate()?;

        let expected = LanguageCode::new(config.language.expected_language.clone());
        let expected_name = expected
            .name()
            .ok_or_else(|| ExtractError::InvalidLanguage(expected.to_string()))?;
        let tokenizer = Tokenizer::new(&config.text);

        Ok(Self {
            config,
            classifier,
            frequency,
            lemmatization: None,
            cancel: None,
            normalizer: Normalizer::new(),
            tokenizer,
            expected,
            expected_name,
        })
    }

    /// Installs a lemmatization stage.
    pub fn with_lemmatization(mut self, lemmatization: Lemmatization) -> Self {
        let configured = self.config.language.lemmatized_language.as_deref();
        if configured != Some(lemmatization.language().as_str()) {
            warn!(
                "Lemmatizer for '{}' does not match configured language {:?}; it will not be used",
                lemmatization.language(),
                configured
            );
        }
        self.lemmatization = Some(lemmatization);
        self
    }

    /// Installs a flag that aborts the run once raised.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the full pipeline over `fragments`.
    ///
    /// Only fails when cancelled; an empty corpus yields an empty result.
    pub fn extract<S>(&self, fragments: &[S]) -> Result<ExtractionResult>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let cancel = self.cancel.as_deref();

        let classified = self.classify_all(fragments)?;

        let names: BTreeSet<&str> = classified.iter().map(|c| c.language_name.as_str()).collect();
        debug!("Preparing stopwords for {} languages", names.len());
        let stopwords = StopwordRegistry::with_languages(names);

        let mut aggregate = self.aggregate(&classified, &stopwords)?;
        info!(
            "Aggregated {} fragments: {} words, {} numbers",
            classified.len(),
            aggregate.words.len(),
            aggregate.numbers.len()
        );

        let words = &mut aggregate.words;
        score_exceptionalism(words, self.frequency.as_ref(), &self.expected, cancel)?;
        score_frequency(words);
        check_cancelled(cancel)?;

        let merged = dedupe_false_friends(words);
        if merged > 0 {
            debug!("Merged {} false friends", merged);
        }

        combine_scores(words, self.config.scoring.exceptionalism_weight);
        let result = ExtractionResult {
            words: rank_words(words),
            numbers: rank_numbers(&aggregate.numbers),
        };

        info!(
            "Extracted {} words and {} numbers in {:.2?}",
            result.words.len(),
            result.numbers.len(),
            start.elapsed()
        );
        Ok(result)
    }

    fn classify_all<'a, S>(&self, fragments: &'a [S]) -> Result<Vec<Classified<'a>>>
    where
        S: AsRef<str> + Sync,
    {
        let classify = |fragment: &'a S| self.classify(fragment.as_ref());
        if self.config.text.parallel {
            fragments.par_iter().map(classify).collect()
        } else {
            fragments.iter().map(classify).collect()
        }
    }

    fn classify<'a>(&self, text: &'a str) -> Result<Classified<'a>> {
        check_cancelled(self.cancel.as_deref())?;

        let language = resolve_language(self.classifier.as_ref(), text, &self.config.language);
        let language_name = language.name().unwrap_or_else(|| {
            debug!(
                "No name for language '{}', using '{}' instead",
                language, self.expected_name
            );
            self.expected_name.clone()
        });

        Ok(Classified {
            text,
            language,
            language_name,
        })
    }

    fn aggregate(&self, classified: &[Classified<'_>], stopwords: &StopwordRegistry) -> Result<Aggregate> {
        if self.config.text.parallel {
            classified
                .par_iter()
                .try_fold(Aggregate::new, |mut acc, item| {
                    acc.add_fragment(&self.process(item, stopwords)?);
                    Ok::<_, ExtractError>(acc)
                })
                .try_reduce(Aggregate::new, |a, b| Ok(a.merge(b)))
        } else {
            let mut acc = Aggregate::new();
            for item in classified {
                acc.add_fragment(&self.process(item, stopwords)?);
            }
            Ok(acc)
        }
    }

    fn process(&self, item: &Classified<'_>, stopwords: &StopwordRegistry) -> Result<FragmentTokens> {
        check_cancelled(self.cancel.as_deref())?;

        let mut text = self.normalizer.normalize(item.text);
        if let Some(lemmatization) = self.lemmatization_for(&item.language) {
            text = lemmatization.lemmatize(&text);
        }

        let tokens = self
            .tokenizer
            .tokenize(&text, &item.language_name, stopwords.get(&item.language_name));
        let (words, numbers) = separate_numbers(tokens);

        Ok(FragmentTokens {
            language: item.language.clone(),
            words,
            numbers,
        })
    }

    fn lemmatization_for(&self, language: &LanguageCode) -> Option<&Lemmatization> {
        let configured = self.config.language.lemmatized_language.as_deref()?;
        if configured != language.as_str() {
            return None;
        }
        self.lemmatization.as_ref().filter(|l| l.applies_to(language))
    }
}

impl std::fmt::Debug for ExpressionExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionExtractor")
            .field("config", &self.config)
            .field("lemmatization", &self.lemmatization)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::FixedClassifier;
    use crate::lemma::{LemmaTable, PosTag};
    use std::collections::HashMap;
    use std::sync::atomic::Ordering;

    struct Uniform(HashMap<&'static str, f64>);

    impl FrequencySource for Uniform {
        fn commonness(&self, term: &str, _language: &LanguageCode) -> Result<f64> {
            Ok(self.0.get(term).copied().unwrap_or(0.0))
        }
    }

    fn extractor(language: &str, parallel: bool) -> ExpressionExtractor {
        let mut config = Config::default();
        config.language.expected_language = language.to_string();
        config.text.parallel = parallel;
        ExpressionExtractor::new(
            config,
            Box::new(FixedClassifier::new(language)),
            Box::new(Uniform(HashMap::from([("ferret", 0.02), ("badger", 0.01)]))),
        )
        .unwrap()
    }

    #[test]
    fn test_stopwords_and_counts() {
        let result = extractor("en", false)
            .extract(&["the ferret hissed", "the badger hissed"])
            .unwrap();

        let hissed = result.words.iter().find(|w| w.term == "hissed").unwrap();
        assert_eq!(hissed.occurrences, 2);
        assert_eq!(hissed.frequency, 1.0);
        assert!(result.words.iter().all(|w| w.term != "the"));
        assert!(result.words.iter().filter(|w| w.term != "hissed").all(|w| w.frequency < 1.0));
    }

    #[test]
    fn test_unnamed_language_uses_expected_resources() {
        let mut config = Config::default();
        config.language.expected_language = "en".to_string();
        let extractor = ExpressionExtractor::new(
            config,
            Box::new(FixedClassifier::new("xx")),
            Box::new(Uniform(HashMap::from([("ferret", 0.02)]))),
        )
        .unwrap();

        let result = extractor.extract(&["the ferret and the people"]).unwrap();

        let terms: Vec<&str> = result.terms().collect();
        assert_eq!(terms, vec!["ferret"]);
        assert_eq!(result.words[0].language.as_str(), "xx");
        assert_eq!(result.words[0].occurrences, 1);
    }

    #[test]
    fn test_numbers_separated() {
        let result = extractor("en", false)
            .extract(&["born 1987 in bremen", "since 1987 at 42 street"])
            .unwrap();

        assert_eq!(result.numbers.len(), 1);
        assert_eq!(result.numbers[0].term, "1987");
        assert_eq!(result.numbers[0].occurrences, 2);
        assert!(result.words.iter().all(|w| w.term != "1987"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = ["Fernweh und Heimweh", "the cat sat on a mat", "cat 2019 cat", "schnell schnell"];
        let sequential = extractor("de", false).extract(&corpus).unwrap();
        let parallel = extractor("de", true).extract(&corpus).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_corpus() {
        let empty: [&str; 0] = [];
        let result = extractor("en", true).extract(&empty).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.scoring.exceptionalism_weight = 1.5;
        let err = ExpressionExtractor::new(
            config,
            Box::new(FixedClassifier::new("de")),
            Box::new(Uniform(HashMap::new())),
        )
        .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidWeight(_)));
    }

    #[test]
    fn test_lemmatization_before_filtering() {
        let table = LemmaTable::from_entries([("Katzen", PosTag::Noun, "Katze"), ("Hunde", PosTag::Noun, "Hund")]);
        let extractor = extractor("de", false).with_lemmatization(Lemmatization::from_table("de", table));

        let result = extractor.extract(&["Katzen Hunde", "Katze"]).unwrap();
        let katze = result.words.iter().find(|w| w.term == "katze").unwrap();
        assert_eq!(katze.occurrences, 2);
        assert!(result.words.iter().any(|w| w.term == "hund"));
        assert!(result.words.iter().all(|w| w.term != "katzen" && w.term != "hunde"));
    }

    #[test]
    fn test_cancelled() {
        let flag = Arc::new(AtomicBool::new(false));
        let extractor = extractor("en", true).with_cancellation(flag.clone());
        flag.store(true, Ordering::Relaxed);

        let err = extractor.extract(&["the cat sat"]).unwrap_err();
        assert!(matches!(err, ExtractError::Cancelled));
    }
}
