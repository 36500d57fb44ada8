//! Dictionary provider
//!
//! A dictionary is a read-only set of unique, uppercase words sharing one
//! length. It is loaded once and may be shared by any number of games.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};

use crate::core::Word;
use crate::error::DictionaryError;
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::Path;

/// Word length used when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Set of valid words of a single length
///
/// Words are kept sorted, so iteration order and seeded random draws are
/// reproducible regardless of source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
}

impl Dictionary {
    /// Load from newline-delimited text
    ///
    /// Entries are trimmed, uppercased, filtered to `word_length` letters and
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no entry survives filtering.
    ///
    /// # Examples
    /// ```
    /// use wordy::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::load("crane\nslate\nCRANE\ncat\n", 5).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(Dictionary::load("cat\ndog\n", 5).is_err());
    /// ```
    pub fn load(source: &str, word_length: usize) -> Result<Self, DictionaryError> {
        let parsed = loader::parse_words(source, word_length);
        debug!(
            "Parsed dictionary source: {} kept, {} wrong length, {} invalid",
            parsed.words.len(),
            parsed.wrong_length,
            parsed.invalid
        );
        Self::from_words(parsed.words, word_length)
    }

    /// Load from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it has no words of `word_length` letters.
    pub fn from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let source = loader::read_source(path)?;
        let dictionary = Self::load(&source, word_length)?;
        info!(
            "Loaded {} {}-letter words from {}",
            dictionary.len(),
            word_length,
            path.display()
        );
        Ok(dictionary)
    }

    /// Load from the word list bundled with the crate
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the bundled list has no words of
    /// `word_length` letters.
    pub fn embedded(word_length: usize) -> Result<Self, DictionaryError> {
        let parsed = loader::parse_lines(EMBEDDED_WORDS.iter().copied(), word_length);
        let dictionary = Self::from_words(parsed.words, word_length)?;
        info!(
            "Loaded {} {}-letter words from the bundled list",
            dictionary.len(),
            word_length
        );
        Ok(dictionary)
    }

    /// Build from already-normalized words
    ///
    /// Words of the wrong length are dropped and duplicates collapsed.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if nothing remains.
    pub fn from_words<I>(words: I, word_length: usize) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut words: Vec<Word> = words
            .into_iter()
            .filter(|w| w.len() == word_length)
            .collect();
        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(DictionaryError::Empty { word_length });
        }

        Ok(Self { word_length, words })
    }

    /// Draw a uniformly random word
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if there is nothing to draw from.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, DictionaryError> {
        self.words.choose(rng).ok_or(DictionaryError::Empty {
            word_length: self.word_length,
        })
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All words, sorted
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
