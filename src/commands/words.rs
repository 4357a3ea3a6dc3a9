//! Dictionary lookup command
//!
//! Lists the dictionary words that start with a prefix.

use crate::dictionary::Dictionary;

/// Result of a prefix lookup
#[derive(Debug)]
pub struct WordsResult {
    pub prefix: String,
    pub words: Vec<String>,
}

/// List dictionary words starting with `prefix`
///
/// The prefix is lowercased first.
///
/// # Errors
///
/// Returns an error if the prefix contains characters outside a-z, since no
/// dictionary word could match.
pub fn list_words(prefix: &str, dictionary: &Dictionary) -> Result<WordsResult, String> {
    let prefix = prefix.trim().to_lowercase();

    if !prefix.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("Prefix '{prefix}' must contain only letters a-z"));
    }

    let words = dictionary.words_with_prefix(&prefix);
    Ok(WordsResult { prefix, words })
}
