//! Wordy
//!
//! A word-guessing game: find a hidden dictionary word in a limited number of
//! attempts, guided by per-letter feedback. Includes a constraint reducer and
//! automated guessers that play the same game.
//!
//! # Quick Start
//!
//! ```rust
//! use wordy::dictionary::Dictionary;
//! use wordy::game::{Game, GameConfig, GameStatus};
//!
//! let dictionary = Dictionary::load("crane\nsmart\nstart\nstats\n", 5).unwrap();
//! let mut game = Game::with_solution(&dictionary, GameConfig::default(), "stats").unwrap();
//!
//! let guess = game.submit_guess("smart").unwrap();
//! println!("{guess}"); // SMART 🟩⬜🟩⬜🟨
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! game.submit_guess("stats").unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod dictionary;

// Game state machine and automated play
pub mod game;

// Candidate narrowing and guess strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
