//! Automated guessing support
//!
//! Candidate narrowing from feedback plus the pluggable guess strategies
//! that consume it.

pub mod constraints;
pub mod entropy;
pub mod strategy;

pub use constraints::{Constraints, filter_candidates, known_letters, known_positions, tried_words};
pub use strategy::{
    EntropyGuesser, FirstCandidateGuesser, Guesser, RandomGuesser, StrategyType,
};
