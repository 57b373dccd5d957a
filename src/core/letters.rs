//! Letter multisets and the sub-multiset check
//!
//! A word can be formed from a source word when every letter it uses occurs
//! at least as many times in the source.

use rustc_hash::FxHashMap;

/// Occurrence count of each lowercased letter in a word
///
/// The sum of all counts equals the number of letters counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterCounts {
    /// Count the letters of `text` after lowercasing it
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut total = 0;

        for letter in text.chars().flat_map(char::to_lowercase) {
            *counts.entry(letter).or_insert(0) += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// Occurrences of `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Check whether `target` can be spelled using these letters
    ///
    /// Walks the lowercased target, consuming one occurrence per letter and
    /// bailing out on the first letter that has run out.
    #[must_use]
    pub fn covers(&self, target: &str) -> bool {
        let mut remaining = self.counts.clone();

        for letter in target.chars().flat_map(char::to_lowercase) {
            match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }
}

/// Check whether `target` can be formed from the letters of `source`
///
/// Case-insensitive and multiplicity-aware.
///
/// # Examples
/// ```
/// use word_from_word::core::can_form_word;
///
/// assert!(can_form_word("топот", "топ"));
/// assert!(!can_form_word("топ", "топот"));
/// assert!(can_form_word("Стол", "СТО"));
/// ```
#[must_use]
pub fn can_form_word(source: &str, target: &str) -> bool {
    LetterCounts::from_text(source).covers(target)
}
