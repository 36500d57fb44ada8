//! Core domain types for the word game
//!
//! This module contains the fundamental value types and the feedback engine.
//! Everything here is pure: no I/O, no randomness, no logging.

mod feedback;
mod word;

pub use feedback::{FeedbackRule, Guess, HintKind, LetterHint, score, score_canonical};
pub use word::{Word, WordError};
