//! Prefix tree over characters

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminal: bool,
}

/// Character trie answering membership and prefix queries in O(key length)
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning `true` if it was not already present
    pub fn insert(&mut self, key: &str) -> bool {
        let mut current = &mut self.root;
        for c in key.chars() {
            current = current.children.entry(c).or_default();
        }

        if current.terminal {
            false
        } else {
            current.terminal = true;
            self.len += 1;
            true
        }
    }

    /// Whether `key` itself was inserted
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.node(key).is_some_and(|node| node.terminal)
    }

    /// Whether some inserted key starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// All inserted keys starting with `prefix`, sorted
    #[must_use]
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(node) = self.node(prefix) {
            let mut buffer = prefix.to_string();
            collect_keys(node, &mut buffer, &mut keys);
        }
        keys.sort_unstable();
        keys
    }

    /// Number of distinct keys
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in prefix.chars() {
            current = current.children.get(&c)?;
        }
        Some(current)
    }
}

fn collect_keys(node: &TrieNode, buffer: &mut String, keys: &mut Vec<String>) {
    if node.terminal {
        keys.push(buffer.clone());
    }
    for (&c, child) in &node.children {
        buffer.push(c);
        collect_keys(child, buffer, keys);
        buffer.pop();
    }
}
