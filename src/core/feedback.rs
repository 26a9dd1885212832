//! Wordle feedback calculation and representation
//!
//! Feedback holds one [`Mark`] per guess position:
//! - `Exact` = Green (letter in correct position)
//! - `Misplaced` = Yellow (letter in word, wrong position)
//! - `Absent` = Gray (letter not in word, or no unmatched copies left)

use super::Word;
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Misplaced,
    Absent,
}

impl Mark {
    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'X'/'x'/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How duplicate letters in a guess are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackRule {
    /// Wordle's rule: each target letter backs at most one Exact or Misplaced mark
    #[default]
    Standard,
    /// Misplaced whenever the letter occurs at any other target position, with no
    /// per-occurrence accounting
    Lenient,
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// All-green feedback of the given length
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self::new(vec![Mark::Exact; length])
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Uses [`FeedbackRule::Standard`].
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available letter pool
    /// 2. Second pass: mark misplaced letters while unmatched copies remain in the pool
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::core::{Feedback, Mark, Word};
    ///
    /// let target = Word::new("trace").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Misplaced, Mark::Exact, Mark::Exact, Mark::Absent, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        Self::evaluate_with(FeedbackRule::Standard, target, guess)
    }

    /// Calculate feedback using an explicit duplicate-letter rule
    #[must_use]
    pub fn evaluate_with(rule: FeedbackRule, target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(target.len(), guess.len(), "words must share a length");
        match rule {
            FeedbackRule::Standard => evaluate_standard(target.letters(), guess.letters()),
            FeedbackRule::Lenient => evaluate_lenient(target.letters(), guess.letters()),
        }
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_sampler::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Feedback::parse("GQ").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(Mark::from_char)
            .collect::<Option<Vec<_>>>()?;

        if marks.is_empty() {
            None
        } else {
            Some(Self::new(marks))
        }
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is `Exact`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            let ch = match mark {
                Mark::Exact => 'G',
                Mark::Misplaced => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

fn evaluate_standard(target: &[u8], guess: &[u8]) -> Feedback {
    let mut marks = vec![Mark::Absent; guess.len()];
    let mut available = [0u8; 26];

    // First pass: greens, counting target letters that are left over
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            marks[i] = Mark::Exact;
        } else {
            available[usize::from(t - b'a')] += 1;
        }
    }

    // Second pass: yellows from the remaining pool
    for (i, &g) in guess.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        let slot = &mut available[usize::from(g - b'a')];
        if *slot > 0 {
            marks[i] = Mark::Misplaced;
            *slot -= 1;
        }
    }

    Feedback::new(marks)
}

fn evaluate_lenient(target: &[u8], guess: &[u8]) -> Feedback {
    let marks = guess
        .iter()
        .enumerate()
        .map(|(i, &g)| {
            if target[i] == g {
                Mark::Exact
            } else if target
                .iter()
                .enumerate()
                .any(|(j, &t)| j != i && t == g)
            {
                Mark::Misplaced
            } else {
                Mark::Absent
            }
        })
        .collect();

    Feedback::new(marks)
}
