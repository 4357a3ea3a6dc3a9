//! Puzzle word representation
//!
//! A Word is an ordered run of coordinates on one puzzle. Its text is derived
//! from the grid once, at construction.

use super::{Coordinate, LetterSet, Puzzle};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A sequence of letter slots with no two consecutive slots on the same side
///
/// Equality, hashing and ordering consider only the coordinates.
#[derive(Debug, Clone)]
pub struct Word {
    coordinates: Vec<Coordinate>,
    text: String,
}

/// Error type for coordinate sequences that cannot form a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    OutOfBounds(Coordinate),
    RepeatedSide { index: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must have at least one letter"),
            Self::OutOfBounds(at) => write!(f, "Coordinate {at} is outside the puzzle"),
            Self::RepeatedSide { index } => {
                write!(f, "Letter {index} is on the same side as the letter before it")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// A one-letter word at `at`
    ///
    /// # Panics
    /// Panics if `at` is outside the puzzle
    #[must_use]
    pub fn singleton(puzzle: &Puzzle, at: Coordinate) -> Self {
        Self {
            coordinates: vec![at],
            text: puzzle.letter(at).to_string(),
        }
    }

    /// Build a word from an explicit coordinate sequence
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The sequence is empty
    /// - A coordinate lies outside the puzzle
    /// - Two consecutive coordinates share a side
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Coordinate, Puzzle, Word};
    ///
    /// let puzzle = Puzzle::new(["abc", "def", "ghi", "jkl"]);
    /// let word = Word::from_coordinates(
    ///     &puzzle,
    ///     vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)],
    /// )
    /// .unwrap();
    /// assert_eq!(word.text(), "adg");
    ///
    /// assert!(Word::from_coordinates(&puzzle, vec![]).is_err());
    /// ```
    pub fn from_coordinates(
        puzzle: &Puzzle,
        coordinates: Vec<Coordinate>,
    ) -> Result<Self, WordError> {
        if coordinates.is_empty() {
            return Err(WordError::Empty);
        }

        let mut text = String::with_capacity(coordinates.len());
        for (index, &at) in coordinates.iter().enumerate() {
            let letter = puzzle.get(at).ok_or(WordError::OutOfBounds(at))?;
            if index > 0 && !at.can_follow(coordinates[index - 1]) {
                return Err(WordError::RepeatedSide { index });
            }
            text.push(letter);
        }

        Ok(Self { coordinates, text })
    }

    /// A new word with `next` appended
    ///
    /// The caller guarantees `next` is on a different side than the current
    /// last letter.
    #[must_use]
    pub fn extended(&self, puzzle: &Puzzle, next: Coordinate) -> Self {
        debug_assert!(next.can_follow(self.last()), "consecutive letters share a side");

        let mut coordinates = Vec::with_capacity(self.coordinates.len() + 1);
        coordinates.extend_from_slice(&self.coordinates);
        coordinates.push(next);

        let mut text = String::with_capacity(self.text.len() + 1);
        text.push_str(&self.text);
        text.push(puzzle.letter(next));

        Self { coordinates, text }
    }

    #[inline]
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Coordinate {
        self.coordinates[0]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Coordinate {
        self.coordinates[self.coordinates.len() - 1]
    }

    /// First letter of the text
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        self.text.chars().next().unwrap_or_default()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false for words built through this API
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Distinct letters of the text
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        LetterSet::from_text(&self.text)
    }

    /// Whether no two consecutive letters share a side
    #[must_use]
    pub fn alternates_sides(&self) -> bool {
        self.coordinates
            .windows(2)
            .all(|pair| pair[1].can_follow(pair[0]))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coordinates.cmp(&other.coordinates)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
