//! Wordle word representation
//!
//! A Word stores a fixed-length sequence of lowercase letters. The length is chosen per run
//! (five by default) and checked when words enter the solver.

use super::letters::{LetterSet, is_letter};
use std::fmt;
use thiserror::Error;

/// Word length used when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// An immutable word over the `a..=z` alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: Box<[u8]>,
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of any non-zero length
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, non-ASCII or contains anything other
    /// than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(is_letter) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: text.into_bytes().into_boxed_slice(),
        })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, otherwise the same errors
    /// as [`Word::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::core::{Word, WordError};
    ///
    /// assert!(Word::with_length("slate", 5).is_ok());
    /// assert_eq!(
    ///     Word::with_length("slates", 5),
    ///     Err(WordError::InvalidLength { expected: 5, actual: 6 })
    /// );
    /// ```
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with slices
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> LetterSet {
        self.letters.iter().copied().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
