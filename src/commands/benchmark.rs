//! Benchmark command
//!
//! Solves a batch of puzzles and reports timing and chain lengths.

use super::solve::{SolveConfig, solve_puzzle};
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// Puzzles used when no puzzle file is given
pub const SAMPLE_PUZZLES: &[&[&str]] = &[
    &["tul", "dca", "rph", "nes"],
    &["yfu", "lnr", "gxb", "mai"],
    &["abc", "def", "ghi", "jkl"],
    &["rao", "ite", "nls", "dcm"],
    &["hkw", "tei", "ors", "nal"],
];

/// Outcome for one puzzle
#[derive(Debug, Clone)]
pub struct PuzzleRun {
    pub sides: Vec<String>,
    pub words: Option<Vec<String>>,
    pub expanded: usize,
    pub duration: Duration,
    /// Set when the puzzle was rejected before searching
    pub error: Option<String>,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub runs: Vec<PuzzleRun>,
    pub solved: usize,
    pub unsolved: usize,
    pub invalid: usize,
    pub average_words: f64,
    pub distribution: HashMap<usize, usize>,
    pub total_expanded: usize,
    pub duration: Duration,
}

/// Parse a puzzle file: one puzzle per line, sides separated by whitespace or
/// commas. Blank lines and lines starting with `#` are skipped.
#[must_use]
pub fn parse_puzzles(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|side| !side.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Load puzzles from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_puzzles<P: AsRef<Path>>(path: P) -> io::Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_puzzles(&content))
}

/// The built-in sample puzzles as owned sides
#[must_use]
pub fn sample_puzzles() -> Vec<Vec<String>> {
    SAMPLE_PUZZLES
        .iter()
        .map(|sides| sides.iter().map(|s| (*s).to_string()).collect())
        .collect()
}

/// Solve every puzzle in turn
pub fn run_benchmark(
    puzzles: &[Vec<String>],
    dictionary: &Dictionary,
    word_limit: usize,
) -> BenchmarkResult {
    let pb = ProgressBar::new(puzzles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut runs = Vec::with_capacity(puzzles.len());

    for sides in puzzles {
        pb.set_message(sides.join("-"));

        let mut config = SolveConfig::new(sides.clone());
        config.word_limit = word_limit;

        let run = match solve_puzzle(config, dictionary) {
            Ok(result) => PuzzleRun {
                sides: sides.clone(),
                words: result.words,
                expanded: result.stats.expanded,
                duration: result.duration,
                error: None,
            },
            Err(error) => {
                log::warn!("skipping puzzle {}: {error}", sides.join("-"));
                PuzzleRun {
                    sides: sides.clone(),
                    words: None,
                    expanded: 0,
                    duration: Duration::ZERO,
                    error: Some(error),
                }
            }
        };

        runs.push(run);
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(runs, start.elapsed())
}

fn summarize(runs: Vec<PuzzleRun>, duration: Duration) -> BenchmarkResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for words in runs.iter().filter_map(|run| run.words.as_ref()) {
        *distribution.entry(words.len()).or_insert(0) += 1;
    }

    let solved: usize = distribution.values().sum();
    let invalid = runs.iter().filter(|run| run.error.is_some()).count();
    let unsolved = runs.len() - solved - invalid;

    let total_words: usize = distribution.iter().map(|(len, count)| len * count).sum();
    let average_words = if solved > 0 {
        total_words as f64 / solved as f64
    } else {
        0.0
    };

    BenchmarkResult {
        total_expanded: runs.iter().map(|run| run.expanded).sum(),
        runs,
        solved,
        unsolved,
        invalid,
        average_words,
        distribution,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_puzzles_splits_sides() {
        let puzzles = parse_puzzles("tul dca rph nes\n# comment\n\nyfu,lnr, gxb ,mai\n");
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0], vec!["tul", "dca", "rph", "nes"]);
        assert_eq!(puzzles[1], vec!["yfu", "lnr", "gxb", "mai"]);
    }

    #[test]
    fn sample_puzzles_are_valid() {
        let puzzles = sample_puzzles();
        assert_eq!(puzzles.len(), SAMPLE_PUZZLES.len());
        for sides in &puzzles {
            assert!(crate::core::Puzzle::new(sides).validate().is_ok());
        }
    }

    #[test]
    fn benchmark_counts_outcomes() {
        let dictionary = Dictionary::from_words(["adgj", "jbehk", "kcfil", "acbd"]);
        let puzzles = parse_puzzles("abc def ghi jkl\nab cd\nab xy\nab c1\n");

        let result = run_benchmark(&puzzles, &dictionary, 6);

        assert_eq!(result.runs.len(), 4);
        assert_eq!(result.solved, 2);
        assert_eq!(result.unsolved, 1);
        assert_eq!(result.invalid, 1);
        assert_eq!(result.distribution.get(&3), Some(&1));
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert!((result.average_words - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builtin_dictionary_solves_every_sample() {
        let dictionary = Dictionary::builtin();
        let result = run_benchmark(&sample_puzzles(), &dictionary, 6);

        assert_eq!(result.solved, SAMPLE_PUZZLES.len());
        assert_eq!(result.unsolved, 0);
        assert_eq!(result.invalid, 0);
        assert_eq!(result.distribution.get(&1), Some(&1));
        assert_eq!(result.distribution.get(&2), Some(&2));
        assert_eq!(result.distribution.get(&3), Some(&1));
        assert_eq!(result.distribution.get(&5), Some(&1));
    }

    #[test]
    fn benchmark_empty_puzzle_list() {
        let dictionary = Dictionary::from_words(["acbd"]);
        let result = run_benchmark(&[], &dictionary, 6);

        assert!(result.runs.is_empty());
        assert_eq!(result.solved, 0);
        assert!(result.average_words.abs() < f64::EPSILON);
    }

    #[test]
    fn load_puzzles_missing_file_fails() {
        assert!(load_puzzles("/nonexistent/letter_boxed/puzzles.txt").is_err());
    }
}
