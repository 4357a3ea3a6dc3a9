//! Puzzle grid
//!
//! The letters of a puzzle grouped onto sides. Each character of each side
//! becomes one `Coordinate`, in declaration order.

use super::{Coordinate, LetterSet};
use std::fmt;

/// Immutable arrangement of letters into sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    sides: Vec<Vec<char>>,
}

/// Problems `Puzzle::validate` can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    NoSides,
    EmptySide(usize),
    InvalidLetter { side: usize, letter: char },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSides => write!(f, "Puzzle must have at least one side"),
            Self::EmptySide(side) => write!(f, "Side {} has no letters", side + 1),
            Self::InvalidLetter { side, letter } => {
                write!(f, "Side {} contains '{letter}', expected a-z", side + 1)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Build a puzzle from one string per side
    ///
    /// Letters are lowercased. No other validation happens here; a puzzle
    /// with no usable moves simply has no answer.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{Coordinate, Puzzle};
    ///
    /// let puzzle = Puzzle::new(["TUL", "dca", "rph", "nes"]);
    /// assert_eq!(puzzle.len(), 12);
    /// assert_eq!(puzzle.letter(Coordinate::new(0, 1)), 'u');
    /// ```
    pub fn new<I, S>(sides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sides = sides
            .into_iter()
            .map(|side| side.as_ref().to_lowercase().chars().collect())
            .collect();

        Self { sides }
    }

    /// Check that the puzzle has sides, every side has letters, and every
    /// letter is `a`-`z`
    ///
    /// # Errors
    /// Returns the first `PuzzleError` found, scanning sides in order.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.sides.is_empty() {
            return Err(PuzzleError::NoSides);
        }

        for (side, letters) in self.sides.iter().enumerate() {
            if letters.is_empty() {
                return Err(PuzzleError::EmptySide(side));
            }
            if let Some(&letter) = letters.iter().find(|c| !c.is_ascii_lowercase()) {
                return Err(PuzzleError::InvalidLetter { side, letter });
            }
        }

        Ok(())
    }

    /// Number of sides
    #[inline]
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.sides.len()
    }

    /// Letters on one side
    ///
    /// # Panics
    /// Panics if `side >= side_count()`
    #[inline]
    #[must_use]
    pub fn side(&self, side: usize) -> &[char] {
        &self.sides[side]
    }

    /// Letter at a coordinate
    ///
    /// # Panics
    /// Panics if the coordinate is outside the puzzle
    #[inline]
    #[must_use]
    pub fn letter(&self, at: Coordinate) -> char {
        self.sides[at.side()][at.position()]
    }

    /// Letter at a coordinate, or `None` if it lies outside the puzzle
    #[inline]
    #[must_use]
    pub fn get(&self, at: Coordinate) -> Option<char> {
        self.sides
            .get(at.side())
            .and_then(|side| side.get(at.position()))
            .copied()
    }

    /// Every coordinate, side by side in declaration order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.sides.iter().enumerate().flat_map(|(side, letters)| {
            (0..letters.len()).map(move |position| Coordinate::new(side, position))
        })
    }

    /// Total number of letter slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.sides.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct letters appearing anywhere in the puzzle
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.sides
            .iter()
            .flatten()
            .fold(LetterSet::EMPTY, |set, &letter| set.with(letter))
    }

    /// Sides as strings, in declaration order
    #[must_use]
    pub fn side_strings(&self) -> Vec<String> {
        self.sides.iter().map(|side| side.iter().collect()).collect()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side_strings().join("-"))
    }
}
