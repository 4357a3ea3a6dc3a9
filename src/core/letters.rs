//! Distinct letter sets
//!
//! A `LetterSet` packs the lowercase letters `a`-`z` into a 26-bit mask, so
//! union and subset checks during search are single integer operations.

use std::fmt;

/// Set of distinct lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Collect the distinct letters of `text`
    ///
    /// Characters outside `a`-`z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterSet;
    ///
    /// let letters = LetterSet::from_text("letter");
    /// assert_eq!(letters.len(), 4);
    /// assert!(letters.contains('r'));
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.chars().fold(Self::EMPTY, Self::with)
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: char) -> Self {
        match Self::bit(letter) {
            Some(bit) => Self(self.0 | bit),
            None => self,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of distinct letters
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

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&letter| self.contains(letter))
    }

    const fn bit(letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter as u32 - 'a' as u32))
        } else {
            None
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        assert!(LetterSet::EMPTY.is_empty());
        assert_eq!(LetterSet::EMPTY.len(), 0);
        assert_eq!(LetterSet::default(), LetterSet::EMPTY);
    }

    #[test]
    fn from_text_collects_distinct_letters() {
        let letters = LetterSet::from_text("banana");
        assert_eq!(letters.len(), 3);
        assert!(letters.contains('b'));
        assert!(letters.contains('a'));
        assert!(letters.contains('n'));
        assert!(!letters.contains('x'));
    }

    #[test]
    fn non_lowercase_letters_ignored() {
        let letters = LetterSet::from_text("Ab-c1");
        assert_eq!(letters.to_string(), "bc");
        assert!(!letters.contains('A'));
    }

    #[test]
    fn subset_relation() {
        let small = LetterSet::from_text("dog");
        let large = LetterSet::from_text("godly");

        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(LetterSet::EMPTY.is_subset(small));
        assert!(small.is_subset(small));
    }

    #[test]
    fn union_combines_letters() {
        let union = LetterSet::from_text("abc").union(LetterSet::from_text("cde"));
        assert_eq!(union.len(), 5);
        assert_eq!(union.to_string(), "abcde");
    }

    #[test]
    fn display_is_alphabetical() {
        assert_eq!(LetterSet::from_text("zebra").to_string(), "aberz");
    }
}
