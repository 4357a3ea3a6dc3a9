//! Search frontier with dominance pruning
//!
//! A priority queue of answers ordered best rank first, plus an index of the
//! live entries used to discard candidates that another entry dominates.
//!
//! The index files each pushed answer under every prefix of its open word, so
//! the entries whose open word extends a candidate's are one lookup away.
//! Popped entries are dropped from the index lazily.

use crate::core::{Answer, LetterSet};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry; the greatest entry is the best-ranked answer
#[derive(Debug)]
struct Entry {
    seq: u64,
    answer: Answer,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Better rank compares greater; among equals the older entry wins
        other
            .answer
            .cmp_rank(&self.answer)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// What the dominance order needs from an indexed answer besides its open word
#[derive(Debug, Clone, Copy)]
struct Footprint {
    seq: u64,
    word_count: usize,
    locked: LetterSet,
}

impl Footprint {
    fn of(answer: &Answer, seq: u64) -> Self {
        Self {
            seq,
            word_count: answer.word_count(),
            locked: answer.locked_letters(),
        }
    }

    /// Whether `self` has no more words and at least the locked letters of
    /// `answer`
    ///
    /// The open-word condition is covered by the bucket `self` was found in.
    fn dominates(self, answer: &Answer) -> bool {
        self.word_count <= answer.word_count() && answer.locked_letters().is_subset(self.locked)
    }
}

/// Outcome of admitting one batch of candidates
#[derive(Debug, Default)]
pub struct Admission {
    /// Candidates pushed onto the frontier
    pub admitted: usize,
    /// Candidates discarded as dominated
    pub pruned: usize,
    /// Fewest-word complete answer among the admitted candidates
    pub complete: Option<Answer>,
}

/// Best-first frontier of partial answers
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    /// Footprints keyed by every prefix of the answer's open word
    extensions: FxHashMap<String, Vec<Footprint>>,
    /// Sequence numbers still on the heap
    live: FxHashSet<u64>,
    /// Footprints in `extensions`, and how many of those belong to popped entries
    filed: usize,
    stale: usize,
    next_seq: u64,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove and return the best-ranked answer
    pub fn pop(&mut self) -> Option<Answer> {
        let Entry { seq, answer } = self.heap.pop()?;

        self.live.remove(&seq);
        self.stale += answer.open_word().len();
        if self.stale * 2 > self.filed {
            self.compact();
        }

        Some(answer)
    }

    /// Whether a live entry dominates `answer`
    ///
    /// A dominating entry has an open word that starts with `answer`'s open
    /// word, a superset of its locked letters and no more words. Single-word
    /// answers are never dominated.
    #[must_use]
    pub fn is_dominated(&self, answer: &Answer) -> bool {
        if answer.word_count() <= 1 {
            return false;
        }

        self.extensions
            .get(answer.open_word().text())
            .is_some_and(|bucket| {
                bucket.iter().any(|footprint| {
                    self.live.contains(&footprint.seq) && footprint.dominates(answer)
                })
            })
    }

    /// Push a batch of candidates, skipping dominated ones
    ///
    /// Candidates go in best rank first, so a candidate can be dominated by
    /// one admitted earlier in the same batch. Complete answers are never
    /// discarded, and the fewest-word one is reported back.
    pub fn admit<I, F>(&mut self, candidates: I, is_complete: F) -> Admission
    where
        I: IntoIterator<Item = Answer>,
        F: Fn(&Answer) -> bool,
    {
        let mut batch: Vec<Answer> = candidates.into_iter().collect();
        batch.sort_by(|a, b| a.cmp_rank(b).then_with(|| a.words().cmp(b.words())));

        let mut admission = Admission::default();
        for answer in batch {
            let complete = is_complete(&answer);
            if !complete && self.is_dominated(&answer) {
                admission.pruned += 1;
                continue;
            }

            if complete
                && admission
                    .complete
                    .as_ref()
                    .is_none_or(|best| answer.word_count() < best.word_count())
            {
                admission.complete = Some(answer.clone());
            }

            self.push(answer);
            admission.admitted += 1;
        }

        admission
    }

    fn push(&mut self, answer: Answer) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let footprint = Footprint::of(&answer, seq);
        let text = answer.open_word().text();
        let ends = text.char_indices().map(|(i, _)| i).skip(1);
        for end in ends.chain(std::iter::once(text.len())) {
            let prefix = &text[..end];
            match self.extensions.get_mut(prefix) {
                Some(bucket) => bucket.push(footprint),
                None => {
                    self.extensions.insert(prefix.to_string(), vec![footprint]);
                }
            }
            self.filed += 1;
        }

        self.live.insert(seq);
        self.heap.push(Entry { seq, answer });
    }

    /// Drop the footprints of popped entries from the index
    fn compact(&mut self) {
        let live = &self.live;
        self.extensions.retain(|_, bucket| {
            bucket.retain(|footprint| live.contains(&footprint.seq));
            !bucket.is_empty()
        });
        self.filed -= self.stale;
        self.stale = 0;
    }
}
