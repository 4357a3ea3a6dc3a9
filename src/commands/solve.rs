//! Puzzle solving command
//!
//! Validates a puzzle, runs the search and returns the chain with timing.

use crate::core::Puzzle;
use crate::dictionary::Dictionary;
use crate::solver::{SearchStats, Solver, SolverConfig};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
#[derive(Debug)]
pub struct SolveConfig {
    pub sides: Vec<String>,
    pub word_limit: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(sides: Vec<String>) -> Self {
        Self {
            sides,
            word_limit: SolverConfig::DEFAULT_WORD_LIMIT,
        }
    }
}

/// Result of solving a puzzle
#[derive(Debug)]
pub struct SolveResult {
    pub puzzle: Puzzle,
    /// Word texts of the shortest chain, `None` when no chain exists
    pub words: Option<Vec<String>>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.words.is_some()
    }
}

/// Solve one puzzle against the given dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The puzzle has no sides, an empty side, or a letter outside a-z
/// - The word limit is zero
pub fn solve_puzzle(config: SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, String> {
    let puzzle = Puzzle::new(&config.sides);
    puzzle
        .validate()
        .map_err(|e| format!("Invalid puzzle: {e}"))?;

    if config.word_limit == 0 {
        return Err("Word limit must be at least 1".to_string());
    }

    let start = Instant::now();
    let report = Solver::new(&puzzle, dictionary, SolverConfig::new(config.word_limit)).search();
    let duration = start.elapsed();

    let words = report
        .answer
        .map(|answer| answer.texts().into_iter().map(str::to_string).collect());

    Ok(SolveResult {
        puzzle,
        words,
        stats: report.stats,
        duration,
    })
}
