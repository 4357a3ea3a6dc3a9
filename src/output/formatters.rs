//! Formatting utilities for terminal output

use crate::core::Puzzle;

/// Join a chain of words as `FLAG → GOAT`
#[must_use]
pub fn format_chain<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|word| word.as_ref().to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Puzzle sides as `TUL │ DCA │ RPH │ NES`
#[must_use]
pub fn format_sides(puzzle: &Puzzle) -> String {
    puzzle
        .side_strings()
        .iter()
        .map(|side| side.to_uppercase())
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
