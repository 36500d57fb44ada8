//! Word representation
//!
//! A Word stores an uppercase ASCII word. Length is not fixed here; the
//! dictionary a word is checked against decides which length is playable.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase, purely alphabetic word
///
/// Stores the normalized text; letters are ASCII so byte index == letter index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAlphabetic(text) => {
                write!(f, "'{text}' must contain only letters A-Z")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordy::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::NonAlphabetic(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.text.as_bytes()[position])
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.bytes().map(char::from)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters().any(|c| c == letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_case() {
        assert_eq!(Word::new("crane").unwrap().as_str(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().as_str(), "CRANE");
    }

    #[test]
    fn word_creation_rejects_non_letters() {
        assert!(matches!(Word::new("cran3"), Err(WordError::NonAlphabetic(_))));
        assert!(matches!(Word::new("cran "), Err(WordError::NonAlphabetic(_))));
        assert!(matches!(Word::new("cran!"), Err(WordError::NonAlphabetic(_))));
        assert!(matches!(Word::new("café"), Err(WordError::NonAlphabetic(_))));
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_length_is_not_fixed() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("planet").unwrap().len(), 6);
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), 'C');
        assert_eq!(word.letter_at(4), 'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('A'));
        assert!(!word.has_letter('Z'));
        assert!(!word.has_letter('a'));
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("stats").unwrap().letter_counts();
        assert_eq!(counts.get(&'S'), Some(&2));
        assert_eq!(counts.get(&'T'), Some(&2));
        assert_eq!(counts.get(&'A'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
    }
}
