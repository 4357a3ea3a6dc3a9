//! Candidate solution chains
//!
//! An Answer is a non-empty chain of Words. Every word but the last is
//! locked (a confirmed dictionary word); the last is the open word the search
//! keeps extending. Each word starts on the coordinate where the previous one
//! ended.

use super::{Coordinate, LetterSet, Puzzle, Word};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A possibly incomplete solution chain
///
/// Equality and hashing consider only the words.
#[derive(Debug, Clone)]
pub struct Answer {
    words: Vec<Word>,
    locked_letters: LetterSet,
}

/// Error type for word sequences that cannot form a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    Empty,
    BrokenChain { index: usize },
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Answer must contain at least one word"),
            Self::BrokenChain { index } => write!(
                f,
                "Word {index} does not start where the previous word ends"
            ),
        }
    }
}

impl std::error::Error for AnswerError {}

impl Answer {
    /// A single open one-letter word at `at`
    #[must_use]
    pub fn seed(puzzle: &Puzzle, at: Coordinate) -> Self {
        Self {
            words: vec![Word::singleton(puzzle, at)],
            locked_letters: LetterSet::EMPTY,
        }
    }

    /// Build an answer from explicit words, the last of which is open
    ///
    /// # Errors
    /// Returns `AnswerError` if the list is empty or a word does not start on
    /// the previous word's final coordinate.
    pub fn from_words(words: Vec<Word>) -> Result<Self, AnswerError> {
        if words.is_empty() {
            return Err(AnswerError::Empty);
        }
        let broken = (1..words.len()).find(|&i| words[i].first() != words[i - 1].last());
        if let Some(index) = broken {
            return Err(AnswerError::BrokenChain { index });
        }

        let locked_letters = words[..words.len() - 1]
            .iter()
            .fold(LetterSet::EMPTY, |set, word| set.union(word.letters()));

        Ok(Self {
            words,
            locked_letters,
        })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The word still being extended
    #[inline]
    #[must_use]
    pub fn open_word(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Words already confirmed against the dictionary
    #[inline]
    #[must_use]
    pub fn locked_words(&self) -> &[Word] {
        &self.words[..self.words.len() - 1]
    }

    /// Distinct letters across the locked words
    #[inline]
    #[must_use]
    pub const fn locked_letters(&self) -> LetterSet {
        self.locked_letters
    }

    /// Same chain with the open word replaced
    #[must_use]
    pub fn with_open_word(&self, open: Word) -> Self {
        let mut words = self.words.clone();
        let last = words.len() - 1;
        words[last] = open;

        Self {
            words,
            locked_letters: self.locked_letters,
        }
    }

    /// Same chain with `finished` locked in place of the open word, followed
    /// by a fresh open word on `finished`'s last coordinate
    #[must_use]
    pub fn with_locked_word(&self, puzzle: &Puzzle, finished: Word) -> Self {
        let next = Word::singleton(puzzle, finished.last());
        let locked_letters = self.locked_letters.union(finished.letters());

        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend_from_slice(self.locked_words());
        words.push(finished);
        words.push(next);

        Self {
            words,
            locked_letters,
        }
    }

    /// Every coordinate touched by any word
    #[must_use]
    pub fn coverage(&self) -> FxHashSet<Coordinate> {
        self.words
            .iter()
            .flat_map(|word| word.coordinates().iter().copied())
            .collect()
    }

    /// Frontier ranking: fewer words first, then more locked letters first
    ///
    /// `Ordering::Less` means `self` ranks ahead of `other`.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.word_count()
            .cmp(&other.word_count())
            .then_with(|| other.locked_letters.len().cmp(&self.locked_letters.len()))
    }

    /// Word texts in chain order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }
}

impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Answer {}

impl Hash for Answer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.texts().join(" → "))
    }
}
