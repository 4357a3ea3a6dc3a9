//! Dictionary for prefix and membership queries
//!
//! Built once from a word source, then shared read-only by the search.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{WORDS, WORDS_COUNT};
pub use trie::Trie;

/// Shortest word length the dictionary accepts
pub const MIN_WORD_LEN: usize = 3;

/// Accepted puzzle words, indexed for prefix lookups
///
/// Only entries made entirely of `a`-`z` with at least `MIN_WORD_LEN` letters
/// are kept. Anything else is dropped silently.
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    /// Build a dictionary from candidate entries
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["flag", "Paris", "go", "goat"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("goat"));
    /// assert!(dictionary.has_prefix("fla"));
    /// assert!(!dictionary.contains("go"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            let word = word.as_ref();
            if Self::accepts(word) {
                trie.insert(word);
            }
        }

        log::debug!("dictionary built with {} words", trie.len());
        Self { trie }
    }

    /// Dictionary over the embedded word list
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(WORDS)
    }

    /// Whether an entry passes the dictionary filter
    #[must_use]
    pub fn accepts(entry: &str) -> bool {
        entry.len() >= MIN_WORD_LEN && entry.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Whether some accepted word starts with `text`
    #[inline]
    #[must_use]
    pub fn has_prefix(&self, text: &str) -> bool {
        self.trie.has_prefix(text)
    }

    /// Whether `text` is an accepted word
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.trie.contains(text)
    }

    /// Accepted words starting with `prefix`, sorted
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.keys_with_prefix(prefix)
    }

    /// Number of distinct accepted words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.trie.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
