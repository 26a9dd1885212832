//! Alphabet and letter sets
//!
//! Letters are lowercase ASCII bytes `a..=z`. A [`LetterSet`] stores a subset of the
//! alphabet as a 26-bit mask, so copying and intersecting sets is a single integer operation.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

const FULL_MASK: u32 = (1 << ALPHABET_SIZE) - 1;

/// Check whether a byte is a letter of the alphabet
#[inline]
#[must_use]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// A set of alphabet letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter of the alphabet
    pub const FULL: Self = Self(FULL_MASK);

    /// Set containing a single letter
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not in `a..=z`
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(bit(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[inline]
const fn bit(letter: u8) -> u32 {
    debug_assert!(is_letter(letter), "letter must be in a..=z");
    1 << (letter - b'a')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_set_has_every_letter() {
        assert_eq!(LetterSet::FULL.len(), 26);
        assert!((b'a'..=b'z').all(|l| LetterSet::FULL.contains(l)));
    }

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'q');
        set.insert(b'a');
        assert!(set.contains(b'q'));
        assert_eq!(set.len(), 2);

        set.remove(b'q');
        assert!(!set.contains(b'q'));
        assert!(set.contains(b'a'));

        // Removing a missing letter is a no-op
        set.remove(b'z');
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn subset_and_intersection() {
        let abc: LetterSet = b"abc".iter().copied().collect();
        let ab: LetterSet = b"ab".iter().copied().collect();

        assert!(ab.is_subset(abc));
        assert!(!abc.is_subset(ab));
        assert_eq!(abc.intersection(LetterSet::single(b'c')), LetterSet::single(b'c'));
        assert!(ab.intersection(LetterSet::single(b'z')).is_empty());
    }

    #[test]
    fn display_is_alphabetical() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.to_string(), "aberz");
    }
}
