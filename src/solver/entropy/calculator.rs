//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{FeedbackRule, HintKind, Word};
use rustc_hash::FxHashMap;

/// Feedback seen by the guesser, one kind per letter
pub type PatternKey = Vec<HintKind>;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Each candidate is treated as an equally likely solution; the guess's
/// entropy is that of the resulting distribution of feedback patterns.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// # Examples
/// ```
/// use wordy::core::{FeedbackRule, Word};
/// use wordy::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(FeedbackRule::Approximate, &guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(rule: FeedbackRule, guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(rule, guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(
    rule: FeedbackRule,
    guess: &Word,
    candidates: &[&Word],
) -> FxHashMap<PatternKey, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        *counts.entry(pattern_of(rule, guess, candidate)).or_insert(0) += 1;
    }

    counts
}

fn pattern_of(rule: FeedbackRule, guess: &Word, candidate: &Word) -> PatternKey {
    rule.score(candidate, guess).iter().map(|h| h.kind()).collect()
}

/// Calculate Shannon entropy from a pattern distribution
///
/// Returns 0.0 for an empty or single-pattern distribution and at most
/// log₂(n) for n patterns.
#[must_use]
pub fn shannon_entropy<K, S>(pattern_counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst-case partition together
#[must_use]
pub fn calculate_metrics(rule: FeedbackRule, guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(rule, guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    }
}
