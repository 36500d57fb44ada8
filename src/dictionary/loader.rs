//! Dictionary source parsing
//!
//! Turns newline-delimited text into normalized words of one length.

use crate::core::Word;
use crate::error::DictionaryError;
use std::fs;
use std::path::Path;

/// Outcome of normalizing a word source
#[derive(Debug, Default)]
pub struct ParsedSource {
    /// Valid words of the requested length, in source order (may repeat)
    pub words: Vec<Word>,
    /// Entries rejected because they are not purely alphabetic
    pub invalid: usize,
    /// Valid words dropped because their length differs
    pub wrong_length: usize,
}

/// Parse newline-delimited words, keeping those of `word_length` letters
///
/// Lines are trimmed and uppercased; blank lines are ignored.
///
/// # Examples
/// ```
/// use wordy::dictionary::loader::parse_words;
///
/// let parsed = parse_words("crane\n  Slate \ncat\nsh0ut\n\n", 5);
/// let words: Vec<&str> = parsed.words.iter().map(|w| w.as_str()).collect();
/// assert_eq!(words, ["CRANE", "SLATE"]);
/// assert_eq!(parsed.wrong_length, 1);
/// assert_eq!(parsed.invalid, 1);
/// ```
#[must_use]
pub fn parse_words(source: &str, word_length: usize) -> ParsedSource {
    parse_lines(source.lines(), word_length)
}

/// Same as [`parse_words`] for an already-split source
pub fn parse_lines<'a, I>(lines: I, word_length: usize) -> ParsedSource
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parsed = ParsedSource::default();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) if word.len() == word_length => parsed.words.push(word),
            Ok(_) => parsed.wrong_length += 1,
            Err(_) => parsed.invalid += 1,
        }
    }

    parsed
}

/// Read a dictionary source file into memory
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, DictionaryError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
