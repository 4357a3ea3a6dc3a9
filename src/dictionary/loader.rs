//! Word list loading utilities
//!
//! Builds dictionaries from files or from embedded string slices.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one entry per line
///
/// Lines are trimmed and blank lines skipped; everything else goes through
/// the dictionary filter.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    log::info!("loading word list from {}", path.display());

    Ok(dictionary_from_lines(&content))
}

/// Build a dictionary from newline-separated text
#[must_use]
pub fn dictionary_from_lines(content: &str) -> Dictionary {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Build a dictionary from an embedded slice
///
/// # Examples
/// ```
/// use letter_boxed::dictionary::loader::dictionary_from_slice;
/// use letter_boxed::dictionary::WORDS;
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert!(dictionary.len() <= WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice)
}
