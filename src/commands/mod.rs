//! Command implementations

pub mod benchmark;
pub mod solve;
pub mod words;

pub use benchmark::{BenchmarkResult, PuzzleRun, run_benchmark};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
pub use words::{WordsResult, list_words};
