//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::{FeedbackRule, Word};
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Returns the word with highest entropy and its entropy value, or `None` if
/// the guess pool is empty. Ties go to the earliest word in the pool.
///
/// # Examples
/// ```
/// use wordy::core::{FeedbackRule, Word};
/// use wordy::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("stare").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, entropy) =
///     select_best_guess(FeedbackRule::Approximate, &guess_refs, &candidate_refs).unwrap();
/// assert_eq!(best.as_str(), "STARE");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    rule: FeedbackRule,
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, guess, calculate_entropy(rule, guess, candidates)))
        .max_by(|(i1, _, e1), (i2, _, e2)| e1.total_cmp(e2).then(i2.cmp(i1)))
        .map(|(_, guess, entropy)| (guess, entropy))
}
