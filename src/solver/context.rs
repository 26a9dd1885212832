//! Read-only state shared by every game in a run
//!
//! A [`SolverContext`] bundles the dictionary, its seed list and the solver configuration.
//! Build it once with [`SolverContext::new`] and pass it by reference; it is `Sync`, so
//! parallel games can share it without locking.

use super::config::SolverConfig;
use super::error::SolverError;
use super::seeds::SeedList;
use crate::core::Word;
use log::info;
use rustc_hash::FxHashSet;

/// De-duplicated list of same-length candidate words, in load order
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary of `word_length`-letter words
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if any word has another length and
    /// `SolverError::EmptyDictionary` if no words are given.
    pub fn new(
        words: impl IntoIterator<Item = Word>,
        word_length: usize,
    ) -> Result<Self, SolverError> {
        let mut index = FxHashSet::default();
        let mut unique = Vec::new();

        for word in words {
            if word.len() != word_length {
                return Err(SolverError::LengthMismatch {
                    word: word.text().to_string(),
                    expected: word_length,
                });
            }
            if index.insert(word.clone()) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(SolverError::EmptyDictionary { word_length });
        }

        Ok(Self {
            words: unique,
            index,
            word_length,
        })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty dictionaries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }
}

/// Dictionary, seed list and configuration for one run
#[derive(Debug, Clone)]
pub struct SolverContext {
    dictionary: Dictionary,
    seeds: SeedList,
    config: SolverConfig,
}

impl SolverContext {
    /// Build the context: validate the dictionary and rank the seed list
    ///
    /// # Errors
    /// Fails if the words do not form a valid dictionary for `config.word_length`.
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::solver::{SolverConfig, SolverContext};
    /// use wordle_sampler::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "slate", "trace", "grape"]);
    /// let ctx = SolverContext::new(words, SolverConfig::default()).unwrap();
    /// assert_eq!(ctx.seeds().len(), 4);
    ///
    /// assert!(SolverContext::new(Vec::new(), SolverConfig::default()).is_err());
    /// ```
    pub fn new(words: Vec<Word>, config: SolverConfig) -> Result<Self, SolverError> {
        let dictionary = Dictionary::new(words, config.word_length)?;
        let seeds = SeedList::determine(dictionary.words(), config.seed_count);

        info!(
            "dictionary ready: {} words of length {}, {} seed words",
            dictionary.len(),
            dictionary.word_length(),
            seeds.len()
        );

        Ok(Self {
            dictionary,
            seeds,
            config,
        })
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn seeds(&self) -> &SeedList {
        &self.seeds
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    /// Validate external text as a word for this run
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` or `SolverError::LengthMismatch` for malformed input.
    pub fn parse_word(&self, text: &str) -> Result<Word, SolverError> {
        let word = Word::new(text).map_err(|source| SolverError::InvalidWord {
            word: text.to_string(),
            source,
        })?;

        if word.len() == self.word_length() {
            Ok(word)
        } else {
            Err(SolverError::LengthMismatch {
                word: text.to_string(),
                expected: self.word_length(),
            })
        }
    }
}
