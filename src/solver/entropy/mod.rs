//! Entropy scoring of guesses
//!
//! Implements Shannon entropy over the feedback patterns a guess would
//! produce against the remaining candidates.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, PatternKey, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
