//! Letter Boxed Solver
//!
//! Finds the shortest chain of dictionary words that uses every letter of a
//! Letter Boxed puzzle, where consecutive letters of a word come from
//! different sides and each word starts with the last letter of the one
//! before.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::Puzzle;
//! use letter_boxed::dictionary::Dictionary;
//! use letter_boxed::solver::{Solver, SolverConfig};
//!
//! let puzzle = Puzzle::new(["abc", "def", "ghi", "jkl"]);
//! let dictionary = Dictionary::from_words(["adgj", "jbehk", "kcfil"]);
//!
//! let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());
//! let answer = solver.shortest_answer().unwrap();
//! assert_eq!(answer.texts(), ["adgj", "jbehk", "kcfil"]);
//! ```

// Core domain types
pub mod core;

// Prefix and membership index
pub mod dictionary;

// Search engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
