//! Core domain types for Letter Boxed puzzles
//!
//! Pure value types: the grid, letter slots, words and answer chains. Nothing
//! here knows about dictionaries or search order.

mod answer;
mod coordinate;
mod letters;
mod puzzle;
mod word;

pub use answer::{Answer, AnswerError};
pub use coordinate::Coordinate;
pub use letters::LetterSet;
pub use puzzle::{Puzzle, PuzzleError};
pub use word::{Word, WordError};
