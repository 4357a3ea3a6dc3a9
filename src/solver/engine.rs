//! Shortest-chain search engine
//!
//! Best-first branch and bound over partial answers, extending the open word
//! one letter at a time.

use super::frontier::Frontier;
use crate::core::{Answer, Puzzle, Word};
use crate::dictionary::Dictionary;
use log::{debug, info, trace};
use rustc_hash::FxHashSet;

/// How often progress is logged, in expanded answers
const PROGRESS_INTERVAL: usize = 10_000;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Answers with more words than this are not expanded further
    pub word_limit: usize,
}

impl SolverConfig {
    pub const DEFAULT_WORD_LIMIT: usize = 6;

    #[must_use]
    pub const fn new(word_limit: usize) -> Self {
        Self { word_limit }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORD_LIMIT)
    }
}

/// Work counters for one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Answers expanded, seeds included
    pub expanded: usize,
    /// Continuations produced by expansion
    pub generated: usize,
    /// Continuations discarded as dominated
    pub pruned: usize,
    /// Largest frontier size seen
    pub peak_frontier: usize,
}

/// Result of a search: the answer, if any, and what it cost
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub answer: Option<Answer>,
    pub stats: SearchStats,
}

/// Finds the shortest word chain covering a puzzle
///
/// Borrows the puzzle and dictionary read-only for the whole search.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    dictionary: &'a Dictionary,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(puzzle: &'a Puzzle, dictionary: &'a Dictionary, config: SolverConfig) -> Self {
        Self {
            puzzle,
            dictionary,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Shortest complete answer, or `None` if the search space runs out
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    /// use letter_boxed::dictionary::Dictionary;
    /// use letter_boxed::solver::{Solver, SolverConfig};
    ///
    /// let puzzle = Puzzle::new(["ab", "cd"]);
    /// let dictionary = Dictionary::from_words(["acb", "bda"]);
    /// let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());
    ///
    /// let answer = solver.shortest_answer().unwrap();
    /// assert_eq!(answer.texts(), ["acb", "bda"]);
    /// ```
    #[must_use]
    pub fn shortest_answer(&self) -> Option<Answer> {
        self.search().answer
    }

    /// Run the search to completion or exhaustion
    #[must_use]
    pub fn search(&self) -> SearchReport {
        info!(
            "searching {} letters on {} sides, word limit {}",
            self.puzzle.len(),
            self.puzzle.side_count(),
            self.config.word_limit
        );

        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new();

        let seeds: FxHashSet<Answer> = self
            .puzzle
            .coordinates()
            .map(|at| Answer::seed(self.puzzle, at))
            .flat_map(|seed| {
                stats.expanded += 1;
                self.legal_continuations(&seed)
            })
            .collect();

        let mut found = self.admit(&mut frontier, seeds, &mut stats);

        while found.is_none() {
            let Some(answer) = frontier.pop() else {
                break;
            };

            stats.expanded += 1;
            if stats.expanded % PROGRESS_INTERVAL == 0 {
                debug!(
                    "expanded {} answers, frontier {}, pruned {}",
                    stats.expanded,
                    frontier.len(),
                    stats.pruned
                );
            }
            trace!("expanding {answer}");

            let continuations = self.legal_continuations(&answer);
            found = self.admit(&mut frontier, continuations, &mut stats);
        }

        match &found {
            Some(answer) => info!(
                "found {} word answer after {} expansions: {answer}",
                answer.word_count(),
                stats.expanded
            ),
            None => info!("search exhausted after {} expansions", stats.expanded),
        }

        SearchReport {
            answer: found,
            stats,
        }
    }

    /// Every answer reachable from `answer` by adding one letter
    ///
    /// The new letter either extends the open word (when the result is still
    /// a dictionary prefix) or completes it as a dictionary word that adds a
    /// letter the locked words lack, starting a fresh open word on that
    /// letter. Answers with more words than the limit have no continuations.
    #[must_use]
    pub fn legal_continuations(&self, answer: &Answer) -> FxHashSet<Answer> {
        let mut continuations = FxHashSet::default();
        if answer.word_count() > self.config.word_limit {
            return continuations;
        }

        let current = answer.open_word();
        let position = current.last();

        for next in self.puzzle.coordinates().filter(|c| c.can_follow(position)) {
            let extended = current.extended(self.puzzle, next);
            let text = extended.text();

            let keep_building = self.dictionary.has_prefix(text);
            let lock_in = self.dictionary.contains(text) && adds_new_letter(answer, &extended);

            match (keep_building, lock_in) {
                (true, true) => {
                    continuations.insert(answer.with_open_word(extended.clone()));
                    continuations.insert(answer.with_locked_word(self.puzzle, extended));
                }
                (true, false) => {
                    continuations.insert(answer.with_open_word(extended));
                }
                (false, true) => {
                    continuations.insert(answer.with_locked_word(self.puzzle, extended));
                }
                (false, false) => {}
            }
        }

        continuations
    }

    /// Whether `answer` covers every letter slot and its open word is a
    /// dictionary word
    #[must_use]
    pub fn is_complete(&self, answer: &Answer) -> bool {
        self.dictionary.contains(answer.open_word().text())
            && answer.coverage().len() == self.puzzle.len()
    }

    fn admit(
        &self,
        frontier: &mut Frontier,
        candidates: FxHashSet<Answer>,
        stats: &mut SearchStats,
    ) -> Option<Answer> {
        stats.generated += candidates.len();

        let admission = frontier.admit(candidates, |answer| self.is_complete(answer));
        stats.pruned += admission.pruned;
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());

        if let Some(answer) = &admission.complete {
            debug!("complete answer admitted: {answer}");
        }
        admission.complete
    }
}

/// Whether `word` contains a letter that none of `answer`'s locked words use
///
/// Only the locked words count; the open word's own letters do not.
fn adds_new_letter(answer: &Answer, word: &Word) -> bool {
    !word.letters().is_subset(answer.locked_letters())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, LetterSet};
    use crate::dictionary::WORDS;
    use std::collections::VecDeque;

    fn solve(sides: &[&str], words: &[&str], limit: usize) -> Option<Answer> {
        let puzzle = Puzzle::new(sides);
        let dictionary = Dictionary::from_words(words);
        Solver::new(&puzzle, &dictionary, SolverConfig::new(limit)).shortest_answer()
    }

    fn word(puzzle: &Puzzle, path: &[(usize, usize)]) -> Word {
        let coordinates = path.iter().map(|&(s, p)| Coordinate::new(s, p)).collect();
        Word::from_coordinates(puzzle, coordinates).unwrap()
    }

    /// Check the structural properties every returned answer must satisfy
    fn assert_valid_solution(puzzle: &Puzzle, dictionary: &Dictionary, answer: &Answer) {
        for word in answer.words() {
            assert!(word.alternates_sides(), "'{word}' repeats a side");
            assert!(dictionary.contains(word.text()), "'{word}' is not a word");
        }
        for pair in answer.words().windows(2) {
            assert_eq!(pair[1].first(), pair[0].last(), "chain broken at '{}'", pair[1]);
        }

        let all: FxHashSet<Coordinate> = puzzle.coordinates().collect();
        assert_eq!(answer.coverage(), all);
    }

    /// Fewest dictionary words chained to cover the puzzle, by breadth-first
    /// search over (last letter, covered letters). Assumes distinct letters.
    fn brute_force_min_words(puzzle: &Puzzle, words: &[&str]) -> Option<usize> {
        let side_of = |letter: char| {
            (0..puzzle.side_count()).find(|&side| puzzle.side(side).contains(&letter))
        };
        let playable: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| Dictionary::accepts(w))
            .filter(|w| {
                let sides: Option<Vec<usize>> = w.chars().map(side_of).collect();
                sides.is_some_and(|sides| sides.windows(2).all(|pair| pair[0] != pair[1]))
            })
            .collect();

        let goal = puzzle.letters();
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::new();
        for &w in &playable {
            let state = (w.chars().last().unwrap(), LetterSet::from_text(w));
            if seen.insert(state) {
                queue.push_back((state, 1));
            }
        }

        while let Some(((last, covered), count)) = queue.pop_front() {
            if covered == goal {
                return Some(count);
            }
            for &w in playable.iter().filter(|w| w.starts_with(last)) {
                let state = (
                    w.chars().last().unwrap(),
                    covered.union(LetterSet::from_text(w)),
                );
                if seen.insert(state) {
                    queue.push_back((state, count + 1));
                }
            }
        }
        None
    }

    #[test]
    fn finds_three_word_chain() {
        let sides = ["abc", "def", "ghi", "jkl"];
        let words = ["adgj", "jbehk", "kcfil"];

        let answer = solve(&sides, &words, 6).unwrap();
        assert_eq!(answer.texts(), ["adgj", "jbehk", "kcfil"]);
        assert_valid_solution(
            &Puzzle::new(sides),
            &Dictionary::from_words(words),
            &answer,
        );
    }

    #[test]
    fn prefers_two_words_over_three() {
        let sides = ["abc", "def", "ghi", "jkl"];
        let words = ["adgj", "jbehk", "kcfil", "adgjbehk", "bdh", "hel", "leg"];

        let answer = solve(&sides, &words, 6).unwrap();
        assert_eq!(answer.texts(), ["adgjbehk", "kcfil"]);
        assert_eq!(
            Some(answer.word_count()),
            brute_force_min_words(&Puzzle::new(sides), &words)
        );
    }

    #[test]
    fn prefers_single_word_when_available() {
        let sides = ["ab", "cd"];
        let words = ["acb", "bda", "acbd", "dac"];

        let answer = solve(&sides, &words, 6).unwrap();
        assert_eq!(answer.texts(), ["acbd"]);
        assert_eq!(
            Some(1),
            brute_force_min_words(&Puzzle::new(sides), &words)
        );
    }

    #[test]
    fn matches_brute_force_on_small_puzzle() {
        let sides = ["ab", "cd"];
        let words = ["acb", "bda", "dab", "cad"];

        let puzzle = Puzzle::new(sides);
        let dictionary = Dictionary::from_words(words);
        let answer = Solver::new(&puzzle, &dictionary, SolverConfig::default())
            .shortest_answer()
            .unwrap();

        assert_valid_solution(&puzzle, &dictionary, &answer);
        assert_eq!(
            Some(answer.word_count()),
            brute_force_min_words(&puzzle, &words)
        );
    }

    #[test]
    fn isolated_side_has_no_answer() {
        let sides = ["abc", "def", "ghi", "xyz"];
        let words = ["adg", "gbe", "ehc", "adgbeh", "cfi"];

        assert!(solve(&sides, &words, 6).is_none());
    }

    #[test]
    fn word_limit_one_requires_single_word() {
        let sides = ["ab", "cd"];
        let words = ["acb", "bda"];

        assert!(solve(&sides, &words, 1).is_none());
        assert_eq!(solve(&sides, &words, 2).unwrap().texts(), ["acb", "bda"]);
    }

    #[test]
    fn word_limit_one_accepts_covering_word() {
        let answer = solve(&["ab", "cd"], &["acbd"], 1).unwrap();
        assert_eq!(answer.word_count(), 1);
    }

    #[test]
    fn single_side_puzzle_has_no_answer() {
        assert!(solve(&["abc"], &["abc", "cab"], 6).is_none());
    }

    #[test]
    fn empty_puzzle_has_no_answer() {
        assert!(solve(&[], &["abc"], 6).is_none());
    }

    #[test]
    fn empty_dictionary_has_no_answer() {
        assert!(solve(&["abc", "def"], &[], 6).is_none());
    }

    #[test]
    fn continuations_extend_and_lock() {
        let puzzle = Puzzle::new(["ab", "cd"]);
        let dictionary = Dictionary::from_words(["acb", "acbd"]);
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());

        let open_ac = Answer::from_words(vec![word(&puzzle, &[(0, 0), (1, 0)])]).unwrap();
        let continuations = solver.legal_continuations(&open_ac);

        // "acb" is both a word and a prefix of "acbd"
        let texts: FxHashSet<Vec<&str>> = continuations.iter().map(Answer::texts).collect();
        assert_eq!(continuations.len(), 2);
        assert!(texts.contains(&vec!["acb"]));
        assert!(texts.contains(&vec!["acb", "b"]));
    }

    #[test]
    fn continuations_never_repeat_side() {
        let puzzle = Puzzle::new(["abc", "def", "ghi", "jkl"]);
        let dictionary = Dictionary::from_words(["abc", "adg", "aeh", "afi"]);
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());

        let seed = Answer::seed(&puzzle, Coordinate::new(0, 0));
        let continuations = solver.legal_continuations(&seed);

        assert_eq!(continuations.len(), 3);
        for answer in &continuations {
            assert!(answer.open_word().alternates_sides());
        }
    }

    #[test]
    fn redundant_word_is_not_locked() {
        let puzzle = Puzzle::new(["ab", "cd"]);
        let dictionary = Dictionary::from_words(["acb", "bca"]);
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());

        let answer = Answer::from_words(vec![
            word(&puzzle, &[(0, 0), (1, 0), (0, 1)]),
            word(&puzzle, &[(0, 1), (1, 0)]),
        ])
        .unwrap();
        let continuations = solver.legal_continuations(&answer);

        // "bca" only reuses a, b and c, so it may stay open but never lock
        assert_eq!(continuations.len(), 1);
        assert!(continuations.iter().all(|a| a.word_count() == 2));
        assert!(continuations.iter().all(|a| a.open_word().text() == "bca"));
    }

    #[test]
    fn word_with_new_letter_is_locked() {
        let puzzle = Puzzle::new(["ab", "cd"]);
        let dictionary = Dictionary::from_words(["acb", "bda"]);
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());

        let answer = Answer::from_words(vec![
            word(&puzzle, &[(0, 0), (1, 0), (0, 1)]),
            word(&puzzle, &[(0, 1), (1, 1)]),
        ])
        .unwrap();
        let continuations = solver.legal_continuations(&answer);

        let locked = continuations
            .iter()
            .find(|a| a.word_count() == 3)
            .unwrap();
        assert_eq!(locked.texts(), ["acb", "bda", "a"]);
        assert_eq!(locked.locked_letters().to_string(), "abcd");
    }

    #[test]
    fn over_limit_answer_has_no_continuations() {
        let puzzle = Puzzle::new(["ab", "cd"]);
        let dictionary = Dictionary::from_words(["acb", "bda"]);
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::new(1));

        let answer = Answer::seed(&puzzle, Coordinate::new(0, 0))
            .with_locked_word(&puzzle, word(&puzzle, &[(0, 0), (1, 0), (0, 1)]));
        assert!(solver.legal_continuations(&answer).is_empty());
    }

    #[test]
    fn completeness_needs_coverage_and_word() {
        let puzzle = Puzzle::new(["ab", "cd"]);
        let dictionary = Dictionary::from_words(["acb", "acbd"]);
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());

        let acb = Answer::from_words(vec![word(&puzzle, &[(0, 0), (1, 0), (0, 1)])]).unwrap();
        let acbd =
            Answer::from_words(vec![word(&puzzle, &[(0, 0), (1, 0), (0, 1), (1, 1)])]).unwrap();
        let acbd_locked = Answer::seed(&puzzle, Coordinate::new(0, 0))
            .with_locked_word(&puzzle, acbd.open_word().clone());

        assert!(!solver.is_complete(&acb));
        assert!(solver.is_complete(&acbd));
        // Covered, but the open word "d" is not a word
        assert!(!solver.is_complete(&acbd_locked));
    }

    #[test]
    fn search_reports_stats() {
        let puzzle = Puzzle::new(["abc", "def", "ghi", "jkl"]);
        let dictionary = Dictionary::from_words(["adgj", "jbehk", "kcfil"]);
        let report = Solver::new(&puzzle, &dictionary, SolverConfig::default()).search();

        assert!(report.answer.is_some());
        assert!(report.stats.expanded >= puzzle.len());
        assert!(report.stats.generated > 0);
        assert!(report.stats.peak_frontier > 0);
    }

    #[test]
    fn builtin_dictionary_solves_single_word_puzzle() {
        let puzzle = Puzzle::new(["tul", "dca", "rph", "nes"]);
        let dictionary = Dictionary::builtin();
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::new(4));

        let answer = solver.shortest_answer().expect("puzzle should be solvable");
        assert_eq!(answer.word_count(), 1);
        assert_valid_solution(&puzzle, &dictionary, &answer);
    }

    #[test]
    fn builtin_dictionary_solves_three_word_puzzle() {
        let puzzle = Puzzle::new(["yfu", "lnr", "gxb", "mai"]);
        let dictionary = Dictionary::builtin();
        let solver = Solver::new(&puzzle, &dictionary, SolverConfig::default());

        let answer = solver.shortest_answer().expect("puzzle should be solvable");
        assert_eq!(answer.word_count(), 3);
        assert_eq!(brute_force_min_words(&puzzle, WORDS), Some(3));
        assert_valid_solution(&puzzle, &dictionary, &answer);
    }
}
