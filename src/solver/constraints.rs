//! Candidate narrowing from accumulated feedback
//!
//! Derives what the history proves about the solution and filters the
//! dictionary down to words still consistent with it. Everything here is a
//! pure function of the history and is recomputed on demand.

use crate::core::{Guess, Word};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet};

/// Letters known to appear somewhere in the solution
#[must_use]
pub fn known_letters(history: &[Guess]) -> BTreeSet<char> {
    history
        .iter()
        .flat_map(Guess::hints)
        .filter(|hint| hint.in_solution())
        .map(|hint| hint.letter())
        .collect()
}

/// Letters known to sit at a specific index, keyed by index
///
/// Later guesses overwrite earlier ones, which never changes the letter since
/// an exact match is exact for the whole game.
#[must_use]
pub fn known_positions(history: &[Guess]) -> BTreeMap<usize, char> {
    history
        .iter()
        .flat_map(Guess::hints)
        .filter(|hint| hint.in_position())
        .map(|hint| (hint.position(), hint.letter()))
        .collect()
}

/// Words already submitted
#[must_use]
pub fn tried_words(history: &[Guess]) -> FxHashSet<Word> {
    history.iter().map(|guess| guess.word().clone()).collect()
}

/// Dictionary words still consistent with the history, in dictionary order
///
/// # Examples
/// ```
/// use wordy::core::{FeedbackRule, Guess, Word};
/// use wordy::dictionary::Dictionary;
/// use wordy::solver::filter_candidates;
///
/// let dictionary = Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap();
/// let solution = Word::new("stats").unwrap();
/// let history = vec![Guess::scored(
///     FeedbackRule::Approximate,
///     &solution,
///     Word::new("smart").unwrap(),
/// )];
///
/// let candidates: Vec<&str> = filter_candidates(&dictionary, &history)
///     .iter()
///     .map(|w| w.as_str())
///     .collect();
/// assert_eq!(candidates, ["START", "STATS"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a Dictionary, history: &[Guess]) -> Vec<&'a Word> {
    Constraints::from_history(history).filter(dictionary)
}

/// Everything the history proves, bundled for repeated filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    known_letters: BTreeSet<char>,
    known_positions: BTreeMap<usize, char>,
    tried_words: FxHashSet<Word>,
}

impl Constraints {
    #[must_use]
    pub fn from_history(history: &[Guess]) -> Self {
        Self {
            known_letters: known_letters(history),
            known_positions: known_positions(history),
            tried_words: tried_words(history),
        }
    }

    #[must_use]
    pub const fn known_letters(&self) -> &BTreeSet<char> {
        &self.known_letters
    }

    #[must_use]
    pub const fn known_positions(&self) -> &BTreeMap<usize, char> {
        &self.known_positions
    }

    #[must_use]
    pub const fn tried_words(&self) -> &FxHashSet<Word> {
        &self.tried_words
    }

    /// Whether `word` satisfies every constraint
    ///
    /// Untried, contains every known letter, and has every fixed letter at
    /// its index.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        !self.tried_words.contains(word)
            && self.known_letters.iter().all(|&letter| word.has_letter(letter))
            && self
                .known_positions
                .iter()
                .all(|(&position, &letter)| {
                    position < word.len() && word.letter_at(position) == letter
                })
    }

    /// Keep the dictionary words this allows, in dictionary order
    #[must_use]
    pub fn filter<'a>(&self, dictionary: &'a Dictionary) -> Vec<&'a Word> {
        dictionary.iter().filter(|word| self.allows(word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackRule;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn history(solution: &str, guesses: &[&str]) -> Vec<Guess> {
        let solution = word(solution);
        guesses
            .iter()
            .map(|g| Guess::scored(FeedbackRule::Approximate, &solution, word(g)))
            .collect()
    }

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn small_dictionary() -> Dictionary {
        Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap()
    }

    #[test]
    fn empty_history_allows_everything() {
        let dictionary = small_dictionary();
        let constraints = Constraints::from_history(&[]);

        assert!(constraints.known_letters().is_empty());
        assert!(constraints.known_positions().is_empty());
        assert!(constraints.tried_words().is_empty());
        assert_eq!(constraints.filter(&dictionary).len(), dictionary.len());
    }

    #[test]
    fn known_letters_collects_present_and_exact() {
        let history = history("stats", &["smart"]);
        let letters: Vec<char> = known_letters(&history).into_iter().collect();
        assert_eq!(letters, ['A', 'S', 'T']);
    }

    #[test]
    fn known_letters_spans_guesses() {
        let history = history("stats", &["crane", "smart"]);
        let letters: Vec<char> = known_letters(&history).into_iter().collect();
        assert_eq!(letters, ['A', 'S', 'T']);
    }

    #[test]
    fn known_positions_records_exact_matches() {
        let history = history("stats", &["smart", "start"]);
        let positions = known_positions(&history);

        assert_eq!(positions.len(), 3);
        assert_eq!(positions[&0], 'S');
        assert_eq!(positions[&1], 'T');
        assert_eq!(positions[&2], 'A');
    }

    #[test]
    fn known_positions_from_solved_guess_rebuilds_solution() {
        for solution in ["stats", "crane", "aaaaa"] {
            let history = history(solution, &[solution]);
            let rebuilt: String = known_positions(&history).values().collect();
            assert_eq!(rebuilt, solution.to_uppercase());
        }
    }

    #[test]
    fn tried_words_lists_guesses() {
        let history = history("stats", &["crane", "smart"]);
        let tried = tried_words(&history);
        assert_eq!(tried.len(), 2);
        assert!(tried.contains(&word("crane")));
        assert!(tried.contains(&word("smart")));
    }

    #[test]
    fn filter_after_smart() {
        let dictionary = small_dictionary();
        let history = history("stats", &["smart"]);
        assert_eq!(
            texts(&filter_candidates(&dictionary, &history)),
            ["START", "STATS"]
        );
    }

    #[test]
    fn filter_after_start_leaves_solution() {
        let dictionary = small_dictionary();
        let history = history("stats", &["smart", "start"]);
        assert_eq!(texts(&filter_candidates(&dictionary, &history)), ["STATS"]);
    }

    #[test]
    fn filter_excludes_tried_words() {
        let dictionary = small_dictionary();
        let history = history("stats", &["crane"]);
        let candidates = filter_candidates(&dictionary, &history);
        assert!(!candidates.iter().any(|w| w.as_str() == "CRANE"));
    }

    #[test]
    fn solution_is_always_a_candidate() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let solution = "stats";
        let history = history(solution, &["crane", "smart", "start", "stabs"]);
        let candidates = filter_candidates(&dictionary, &history);
        assert!(candidates.iter().any(|w| w.as_str() == "STATS"));
    }

    #[test]
    fn solution_survives_any_wrong_first_guess() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let words = dictionary.words();

        for solution in words.iter().step_by(7) {
            for guess in words.iter().step_by(11).filter(|&g| g != solution) {
                for rule in [FeedbackRule::Approximate, FeedbackRule::Canonical] {
                    let history = [Guess::scored(rule, solution, guess.clone())];
                    assert!(
                        Constraints::from_history(&history).allows(solution),
                        "{rule}: {solution} dropped after {guess}"
                    );
                }
            }
        }
    }

    #[test]
    fn candidates_never_grow() {
        let dictionary = Dictionary::embedded(5).unwrap();
        let guesses = ["crane", "smart", "start", "stabs", "stats"];

        let mut previous = dictionary.len();
        for turn in 0..=guesses.len() {
            let history = history("stats", &guesses[..turn]);
            let size = filter_candidates(&dictionary, &history).len();
            assert!(size <= previous, "turn {turn}: {size} > {previous}");
            previous = size;
        }
    }

    #[test]
    fn allows_checks_every_constraint() {
        let constraints = Constraints::from_history(&history("stats", &["smart"]));

        assert!(constraints.allows(&word("stats")));
        assert!(!constraints.allows(&word("smart"))); // tried
        assert!(!constraints.allows(&word("tasks"))); // S not at 0
        assert!(!constraints.allows(&word("sheep"))); // missing A and T
    }
}
