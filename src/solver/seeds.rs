//! Opening-word seed list
//!
//! Ranks dictionary words by how much of the corpus letter mass their distinct letters
//! cover. Built once per dictionary and reused by every game.

use crate::core::Word;
use crate::core::letters::ALPHABET_SIZE;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::cmp::Reverse;

/// A seed word together with its letter-coverage score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub word: Word,
    pub score: u32,
}

/// Ranked list of strong opening guesses, best first
#[derive(Debug, Clone, Default)]
pub struct SeedList {
    entries: Vec<SeedEntry>,
}

impl SeedList {
    /// Keep the `count` words with the highest coverage score
    ///
    /// Ties are broken alphabetically and repeated dictionary entries are kept once, so the
    /// result has exactly `min(count, distinct words)` members.
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::solver::SeedList;
    /// use wordle_sampler::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["eerie", "slate", "crane", "fuzzy"]);
    /// let seeds = SeedList::determine(&words, 2);
    ///
    /// assert_eq!(seeds.len(), 2);
    /// assert!(seeds.words().all(|w| words.contains(w)));
    /// ```
    #[must_use]
    pub fn determine(words: &[Word], count: usize) -> Self {
        let frequencies = letter_frequencies(words);

        let mut entries: Vec<SeedEntry> = words
            .iter()
            .map(|word| SeedEntry {
                word: word.clone(),
                score: coverage_score(word, &frequencies),
            })
            .collect();

        entries.sort_by(|a, b| {
            Reverse(a.score)
                .cmp(&Reverse(b.score))
                .then_with(|| a.word.cmp(&b.word))
        });
        // Equal words have equal scores, so duplicates are adjacent
        entries.dedup_by(|a, b| a.word == b.word);
        entries.truncate(count);

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SeedEntry] {
        &self.entries
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|entry| &entry.word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick a seed word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.entries.choose(rng).map(|entry| &entry.word)
    }
}

/// Count every letter occurrence across the corpus
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> [u32; ALPHABET_SIZE] {
    let mut frequencies = [0u32; ALPHABET_SIZE];
    for word in words {
        for &letter in word.letters() {
            frequencies[usize::from(letter - b'a')] += 1;
        }
    }
    frequencies
}

/// Sum the corpus frequency of each distinct letter of `word`
#[must_use]
pub fn coverage_score(word: &Word, frequencies: &[u32; ALPHABET_SIZE]) -> u32 {
    word.distinct_letters()
        .iter()
        .map(|letter| frequencies[usize::from(letter - b'a')])
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn frequencies_count_every_occurrence() {
        let words = words_from_slice(&["speed", "abide"]);
        let frequencies = letter_frequencies(&words);
        assert_eq!(frequencies[usize::from(b'e' - b'a')], 3);
        assert_eq!(frequencies[usize::from(b'd' - b'a')], 2);
        assert_eq!(frequencies[usize::from(b'z' - b'a')], 0);
    }

    #[test]
    fn coverage_counts_distinct_letters_once() {
        let words = words_from_slice(&["speed", "abide"]);
        let frequencies = letter_frequencies(&words);
        // s=1 p=1 e=3 d=2, the second E adds nothing
        assert_eq!(coverage_score(&words[0], &frequencies), 7);
    }

    #[test]
    fn repeated_letters_rank_below_diverse_words() {
        let words = words_from_slice(&["eerie", "slate", "crane", "trace"]);
        let seeds = SeedList::determine(&words, 4);
        assert_eq!(seeds.entries().last().unwrap().word.text(), "eerie");
    }

    #[test]
    fn ties_break_alphabetically() {
        // Anagrams share a score
        let words = words_from_slice(&["trace", "crate", "react", "cater"]);
        let seeds = SeedList::determine(&words, 4);
        let order: Vec<&str> = seeds.words().map(Word::text).collect();
        assert_eq!(order, ["cater", "crate", "react", "trace"]);
    }

    #[test]
    fn size_is_min_of_count_and_dictionary() {
        let small = words_from_slice(&["crane", "slate", "trace", "grape"]);
        assert_eq!(SeedList::determine(&small, 100).len(), 4);

        let full = words_from_slice(WORDS);
        let seeds = SeedList::determine(&full, 100);
        assert_eq!(seeds.len(), 100);

        let unique: HashSet<&Word> = seeds.words().collect();
        assert_eq!(unique.len(), 100);
        assert!(seeds.words().all(|w| full.contains(w)));
    }

    #[test]
    fn duplicates_in_input_are_kept_once() {
        let words = words_from_slice(&["crane", "crane", "slate"]);
        let seeds = SeedList::determine(&words, 100);
        assert_eq!(seeds.len(), 2);
    }

    #[test]
    fn scores_are_non_increasing() {
        let full = words_from_slice(WORDS);
        let seeds = SeedList::determine(&full, 100);
        assert!(
            seeds
                .entries()
                .windows(2)
                .all(|pair| pair[0].score >= pair[1].score)
        );
    }

    #[test]
    fn choose_returns_member() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let seeds = SeedList::determine(&words, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let pick = seeds.choose(&mut rng).unwrap();
        assert!(words.contains(pick));

        assert!(SeedList::default().choose(&mut rng).is_none());
    }
}
