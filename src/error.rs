//! Error types
//!
//! Setup failures (`DictionaryError`, `GameError`) are fatal for a game.
//! `GuessError` is per-submission; most variants are advisory and leave the
//! game untouched so the guesser can retry.

use crate::core::{Word, WordError};
use crate::game::GameStatus;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to produce a usable dictionary
#[derive(Debug)]
pub enum DictionaryError {
    /// No words of the requested length remain
    Empty { word_length: usize },
    /// The source file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { word_length } => {
                write!(f, "Dictionary has no {word_length}-letter words")
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Rejection of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Empty or contains characters other than letters
    NonAlphabetic(WordError),
    /// Letter count differs from the dictionary's word length
    WrongLength {
        word: Word,
        expected: usize,
        actual: usize,
    },
    /// Already submitted earlier in this game
    AlreadyGuessed(Word),
    /// Not a dictionary word
    NotInDictionary(Word),
    /// The game already finished
    GameOver(GameStatus),
    /// Too many submissions (valid or not); the game is now lost
    AttemptCeilingExceeded { ceiling: usize },
}

impl GuessError {
    /// True for the advisory rejections that never change game state
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        matches!(
            self,
            Self::NonAlphabetic(_)
                | Self::WrongLength { .. }
                | Self::AlreadyGuessed(_)
                | Self::NotInDictionary(_)
        )
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAlphabetic(e) => write!(f, "Invalid guess: {e}"),
            Self::WrongLength {
                word,
                expected,
                actual,
            } => write!(
                f,
                "{word} has {actual} letters, expected {expected}"
            ),
            Self::AlreadyGuessed(word) => {
                write!(f, "Already guessed {word}. Pick a new word.")
            }
            Self::NotInDictionary(word) => write!(f, "{word} not found, try again."),
            Self::GameOver(status) => write!(f, "Game is over ({status})"),
            Self::AttemptCeilingExceeded { ceiling } => {
                write!(f, "Attempt limit of {ceiling} hit, game lost.")
            }
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NonAlphabetic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::NonAlphabetic(e)
    }
}

/// Failure to set up a game
#[derive(Debug)]
pub enum GameError {
    Dictionary(DictionaryError),
    /// A fixed solution failed the same checks as a guess
    InvalidSolution(GuessError),
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dictionary(e) => write!(f, "{e}"),
            Self::InvalidSolution(e) => write!(f, "Invalid solution: {e}"),
            Self::InvalidConfig(msg) => write!(f, "Invalid game configuration: {msg}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dictionary(e) => Some(e),
            Self::InvalidSolution(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<DictionaryError> for GameError {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}
