//! Dictionaries for the word-from-word game
//!
//! Provides the embedded word list compiled into the binary and the immutable
//! [`Dictionary`] value that seed selection and word-set building borrow.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while preparing a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No words to choose a seed from
    #[error("dictionary is empty")]
    Empty,
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An immutable, ordered list of candidate words
///
/// Built once and shared by reference for the lifetime of any number of game
/// sessions. Duplicates are tolerated; every consumer works with sets.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(loader::words_from_slice(slice))
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(DICTIONARY)
    }

    /// Load a dictionary file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read and
    /// `DictionaryError::Empty` if it holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self::new(words))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
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

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Case-insensitive lookup
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| w.text() == word)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
