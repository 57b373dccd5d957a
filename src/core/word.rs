//! Dictionary word representation
//!
//! A Word stores a lowercased dictionary entry along with its length in letters.

use super::letters::LetterCounts;
use std::fmt;
use thiserror::Error;

/// Separator allowed inside compound dictionary entries ("плащ-палатка")
pub const HYPHEN: char = '-';

/// A lowercased dictionary word
///
/// Length is measured in `char`s, so Cyrillic words report their letter count
/// rather than their UTF-8 byte count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. Letters of any alphabet are accepted, plus
    /// the hyphen used by compound entries.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains anything other than letters and hyphens
    ///
    /// # Examples
    /// ```
    /// use word_from_word::core::Word;
    ///
    /// let word = Word::new("Стол").unwrap();
    /// assert_eq!(word.text(), "стол");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("ст0л").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| !c.is_alphabetic() && c != HYPHEN)
        {
            return Err(WordError::InvalidCharacter(bad));
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (hyphens included)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this is a compound entry such as "бизнес-план"
    #[inline]
    #[must_use]
    pub fn is_hyphenated(&self) -> bool {
        self.text.contains(HYPHEN)
    }

    /// Letter multiset of this word
    #[must_use]
    pub fn letters(&self) -> LetterCounts {
        LetterCounts::from_text(&self.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("стол").unwrap();
        assert_eq!(word.text(), "стол");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("СТОЛ").unwrap();
        assert_eq!(word.text(), "стол");

        let word2 = Word::new("СтОл").unwrap();
        assert_eq!(word2.text(), "стол");
    }

    #[test]
    fn length_counts_letters_not_bytes() {
        let word = Word::new("толстосумы").unwrap();
        assert_eq!(word.len(), 10);
        assert_eq!(word.text().len(), 20);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("ст0л"), Err(WordError::InvalidCharacter('0')));
        assert_eq!(Word::new("стол "), Err(WordError::InvalidCharacter(' ')));
        assert!(Word::new("стол!").is_err());
    }

    #[test]
    fn hyphenated_entries() {
        let word = Word::new("плащ-палатка").unwrap();
        assert!(word.is_hyphenated());
        assert_eq!(word.len(), 12);

        assert!(!Word::new("палатка").unwrap().is_hyphenated());
    }

    #[test]
    fn word_letters() {
        let counts = Word::new("топот").unwrap().letters();
        assert_eq!(counts.count('т'), 2);
        assert_eq!(counts.count('о'), 2);
        assert_eq!(counts.count('п'), 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Толстосум").unwrap();
        assert_eq!(format!("{word}"), "толстосум");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("стон").unwrap();
        let word2 = Word::new("СТОН").unwrap();
        let word3 = Word::new("стол").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
