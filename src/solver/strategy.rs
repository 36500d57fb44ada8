//! Guess selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use super::entropy::select_best_guess;
use crate::core::{FeedbackRule, Guess, Word};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A strategy for choosing the next word to submit
pub trait Guesser {
    /// Pick the next guess from the words still consistent with `history`
    ///
    /// Returns `None` if there is nothing left to propose. The word need not
    /// come from `candidates`; the game re-validates whatever is returned.
    fn propose(&mut self, candidates: &[&Word], history: &[Guess]) -> Option<Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug)]
pub enum StrategyType {
    /// First remaining candidate (default)
    First(FirstCandidateGuesser),
    /// Uniform choice among candidates
    Random(RandomGuesser),
    /// Highest-entropy candidate
    Entropy(EntropyGuesser),
}

impl Guesser for StrategyType {
    fn propose(&mut self, candidates: &[&Word], history: &[Guess]) -> Option<Word> {
        match self {
            Self::First(s) => s.propose(candidates, history),
            Self::Random(s) => s.propose(candidates, history),
            Self::Entropy(s) => s.propose(candidates, history),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 3] = ["first", "random", "entropy"];

    /// Create strategy from name string
    ///
    /// `seed` drives the random strategy and `rule` the entropy strategy's
    /// pattern model. Unrecognized names fall back to first-candidate.
    #[must_use]
    pub fn from_name(name: &str, seed: u64, rule: FeedbackRule) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser::new(seed)),
            "entropy" => Self::Entropy(EntropyGuesser::new(rule)),
            _ => Self::First(FirstCandidateGuesser),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Random(_) => "random",
            Self::Entropy(_) => "entropy",
        }
    }
}

/// Always submits the first remaining candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateGuesser;

impl Guesser for FirstCandidateGuesser {
    fn propose(&mut self, candidates: &[&Word], _history: &[Guess]) -> Option<Word> {
        candidates.first().map(|&w| w.clone())
    }
}

/// Picks uniformly among the remaining candidates
#[derive(Debug, Clone)]
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn propose(&mut self, candidates: &[&Word], _history: &[Guess]) -> Option<Word> {
        candidates.choose(&mut self.rng).map(|&w| w.clone())
    }
}

/// Picks the candidate whose feedback splits the candidates most evenly
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyGuesser {
    rule: FeedbackRule,
}

impl EntropyGuesser {
    #[must_use]
    pub const fn new(rule: FeedbackRule) -> Self {
        Self { rule }
    }
}

impl Guesser for EntropyGuesser {
    fn propose(&mut self, candidates: &[&Word], _history: &[Guess]) -> Option<Word> {
        if candidates.len() <= 2 {
            return candidates.first().map(|&w| w.clone());
        }
        select_best_guess(self.rule, candidates, candidates).map(|(best, _)| best.clone())
    }
}
