//! Accumulated letter constraints and candidate filtering
//!
//! [`Knowledge`] records, for every position, which letters may still appear there, plus the
//! letters known to occur somewhere in the target. It is a small value type: `update` returns
//! a fresh copy so the guess selector can explore hypothetical feedback from one base state.

use super::letters::LetterSet;
use super::{Feedback, Mark, Word};
use std::fmt;

/// Constraints learned from the feedback seen so far in one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    allowed: Vec<LetterSet>,
    present: LetterSet,
}

impl Knowledge {
    /// Knowledge for a fresh game: every letter allowed everywhere, nothing confirmed
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            allowed: vec![LetterSet::FULL; word_length],
            present: LetterSet::EMPTY,
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.allowed.len()
    }

    /// Letters still allowed at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.word_length()`
    #[must_use]
    pub fn allowed_at(&self, position: usize) -> LetterSet {
        self.allowed[position]
    }

    /// Letters confirmed to occur somewhere in the target
    #[must_use]
    pub const fn confirmed(&self) -> LetterSet {
        self.present
    }

    /// True if every constraint of `self` is at least as strict as the matching one in `other`
    #[must_use]
    pub fn refines(&self, other: &Self) -> bool {
        self.allowed.len() == other.allowed.len()
            && self
                .allowed
                .iter()
                .zip(&other.allowed)
                .all(|(mine, theirs)| mine.is_subset(*theirs))
            && other.present.is_subset(self.present)
    }

    /// Fold one round of feedback into a new Knowledge value
    ///
    /// `self` is left untouched. Absent letters are excluded with duplicate awareness: when
    /// the same letter earned an Exact or Misplaced mark elsewhere in this guess, it is only
    /// removed where the feedback proves it cannot be.
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::core::{Feedback, Knowledge, Word};
    ///
    /// let target = Word::new("trace").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// let knowledge = Knowledge::new(5).update(&guess, &feedback);
    /// assert!(knowledge.admits(&target));
    /// assert!(!knowledge.admits(&guess));
    /// ```
    #[must_use]
    pub fn update(&self, guess: &Word, feedback: &Feedback) -> Self {
        debug_assert_eq!(guess.len(), self.word_length(), "guess length mismatch");
        debug_assert_eq!(feedback.len(), self.word_length(), "feedback length mismatch");

        let mut next = self.clone();
        let marks = feedback.marks();

        // Letters credited by this guess, read from the original feedback only
        let mut exact = LetterSet::EMPTY;
        let mut misplaced = LetterSet::EMPTY;
        for (&letter, &mark) in guess.letters().iter().zip(marks) {
            match mark {
                Mark::Exact => exact.insert(letter),
                Mark::Misplaced => misplaced.insert(letter),
                Mark::Absent => {}
            }
        }

        for (i, (&letter, &mark)) in guess.letters().iter().zip(marks).enumerate() {
            match mark {
                Mark::Exact => {
                    next.allowed[i] = next.allowed[i].intersection(LetterSet::single(letter));
                }
                Mark::Misplaced => {
                    next.allowed[i].remove(letter);
                    next.present.insert(letter);
                }
                Mark::Absent if misplaced.contains(letter) => {
                    next.allowed[i].remove(letter);
                }
                Mark::Absent if exact.contains(letter) => {
                    for (j, allowed) in next.allowed.iter_mut().enumerate() {
                        let pinned = marks[j] == Mark::Exact && guess.letter_at(j) == letter;
                        if !pinned {
                            allowed.remove(letter);
                        }
                    }
                }
                Mark::Absent => {
                    for allowed in &mut next.allowed {
                        allowed.remove(letter);
                    }
                }
            }
        }

        next
    }

    /// Check whether a word satisfies every accumulated constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        word.len() == self.word_length()
            && word
                .letters()
                .iter()
                .zip(&self.allowed)
                .all(|(&letter, allowed)| allowed.contains(letter))
            && self.present.iter().all(|letter| word.has_letter(letter))
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} +", self.present)?;
        for allowed in &self.allowed {
            write!(f, " [{allowed}]")?;
        }
        Ok(())
    }
}

/// Keep the words of `pool` that satisfy `knowledge`, preserving order
///
/// # Examples
/// ```
/// use wordle_sampler::core::{Knowledge, filter_candidates};
/// use wordle_sampler::wordlists::loader::words_from_slice;
///
/// let pool = words_from_slice(&["crane", "slate"]);
/// assert_eq!(filter_candidates(&pool, &Knowledge::new(5)), pool);
/// ```
#[must_use]
pub fn filter_candidates(pool: &[Word], knowledge: &Knowledge) -> Vec<Word> {
    pool.iter()
        .filter(|word| knowledge.admits(word))
        .cloned()
        .collect()
}

/// Count the words of `pool` that satisfy `knowledge` without allocating
#[must_use]
pub fn count_candidates(pool: &[Word], knowledge: &Knowledge) -> usize {
    pool.iter().filter(|word| knowledge.admits(word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn learn(knowledge: &Knowledge, target: &str, guess: &str) -> Knowledge {
        let guess = word(guess);
        knowledge.update(&guess, &Feedback::evaluate(&word(target), &guess))
    }

    const POOL: &[&str] = &[
        "crane", "slate", "trace", "grape", "irate", "crate", "grate", "abide", "speed", "there",
        "eerie", "floor", "robot", "about", "react", "cater", "tread",
    ];

    #[test]
    fn fresh_knowledge_admits_everything() {
        let pool = words_from_slice(POOL);
        let knowledge = Knowledge::new(5);
        assert_eq!(filter_candidates(&pool, &knowledge), pool);
        assert_eq!(knowledge.confirmed(), LetterSet::EMPTY);
    }

    #[test]
    fn update_does_not_mutate_input() {
        let base = Knowledge::new(5);
        let snapshot = base.clone();
        let _ = learn(&base, "trace", "crane");
        assert_eq!(base, snapshot);
    }

    #[test]
    fn update_applies_each_mark() {
        let knowledge = learn(&Knowledge::new(5), "trace", "crane");

        // C misplaced at 0
        assert!(!knowledge.allowed_at(0).contains(b'c'));
        assert!(knowledge.confirmed().contains(b'c'));
        // R, A, E pinned
        assert_eq!(knowledge.allowed_at(1), LetterSet::single(b'r'));
        assert_eq!(knowledge.allowed_at(2), LetterSet::single(b'a'));
        assert_eq!(knowledge.allowed_at(4), LetterSet::single(b'e'));
        // N excluded everywhere
        assert!((0..5).all(|i| !knowledge.allowed_at(i).contains(b'n')));
    }

    #[test]
    fn exact_pin_is_idempotent() {
        let once = learn(&Knowledge::new(5), "trace", "crane");
        let twice = learn(&once, "trace", "grate");
        assert_eq!(twice.allowed_at(1), LetterSet::single(b'r'));
        assert_eq!(twice.allowed_at(4), LetterSet::single(b'e'));
        assert!(!twice.allowed_at(1).is_empty());
    }

    #[test]
    fn absent_duplicate_next_to_exact_keeps_the_pin() {
        // EERIE vs THERE: E exact at 4, misplaced at 0, absent at 1
        let knowledge = learn(&Knowledge::new(5), "there", "eerie");
        assert_eq!(knowledge.allowed_at(4), LetterSet::single(b'e'));
        assert!(!knowledge.allowed_at(1).contains(b'e'));
        // Misplaced elsewhere means E may still sit at position 2
        assert!(knowledge.allowed_at(2).contains(b'e'));
        assert!(knowledge.admits(&word("there")));
    }

    #[test]
    fn absent_duplicate_with_only_exact_excludes_other_positions() {
        // EERIE vs ABIDE: E exact at 4, the other Es absent
        let knowledge = learn(&Knowledge::new(5), "abide", "eerie");
        assert_eq!(knowledge.allowed_at(4), LetterSet::single(b'e'));
        assert!((0..4).all(|i| !knowledge.allowed_at(i).contains(b'e')));
        assert!(knowledge.admits(&word("abide")));
    }

    #[test]
    fn lenient_feedback_updates_soundly() {
        let target = word("abide");
        let guess = word("speed");
        let feedback = Feedback::evaluate_with(crate::core::FeedbackRule::Lenient, &target, &guess);
        let knowledge = Knowledge::new(5).update(&guess, &feedback);
        assert!(knowledge.admits(&target));
    }

    #[test]
    fn target_is_always_retained() {
        let pool = words_from_slice(POOL);
        for target in &pool {
            for guess in &pool {
                let feedback = Feedback::evaluate(target, guess);
                let knowledge = Knowledge::new(5).update(guess, &feedback);
                assert!(
                    filter_candidates(&pool, &knowledge).contains(target),
                    "{target} dropped after guessing {guess}"
                );
            }
        }
    }

    #[test]
    fn target_retained_across_rounds() {
        let pool = words_from_slice(POOL);
        let target = word("grate");
        let mut knowledge = Knowledge::new(5);
        for guess in ["slate", "crane", "irate"] {
            let guess = word(guess);
            knowledge = knowledge.update(&guess, &Feedback::evaluate(&target, &guess));
            assert!(knowledge.admits(&target));
        }
        assert!(count_candidates(&pool, &knowledge) >= 1);
    }

    #[test]
    fn more_knowledge_never_grows_the_pool() {
        let pool = words_from_slice(POOL);
        let target = word("cater");
        let k1 = learn(&Knowledge::new(5), "cater", "slate");
        let guess = word("crane");
        let k2 = k1.update(&guess, &Feedback::evaluate(&target, &guess));

        assert!(k2.refines(&k1));
        assert!(k1.refines(&Knowledge::new(5)));

        let wide = filter_candidates(&pool, &k1);
        let narrow = filter_candidates(&pool, &k2);
        assert!(narrow.len() <= wide.len());
        assert!(narrow.iter().all(|w| wide.contains(w)));
    }

    #[test]
    fn confirmed_letters_must_appear() {
        let knowledge = learn(&Knowledge::new(5), "trace", "about");
        // A and T misplaced
        assert!(knowledge.confirmed().contains(b'a'));
        assert!(knowledge.confirmed().contains(b't'));
        assert!(!knowledge.admits(&word("crane")));
        assert!(knowledge.admits(&word("trace")));
    }

    #[test]
    fn filter_preserves_order() {
        let pool = words_from_slice(&["irate", "trace", "grate", "slate", "crate"]);
        let knowledge = learn(&Knowledge::new(5), "crate", "slate");
        let kept = filter_candidates(&pool, &knowledge);
        let kept: Vec<&str> = kept.iter().map(Word::text).collect();
        assert_eq!(kept, ["irate", "grate", "crate"]);
    }

    #[test]
    fn wrong_length_word_is_not_admitted() {
        let knowledge = Knowledge::new(5);
        assert!(!knowledge.admits(&word("crates")));
    }
}
