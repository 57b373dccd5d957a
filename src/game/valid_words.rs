//! Valid word set construction
//!
//! Scans a dictionary for every word that can be spelled from a seed's letters.

use crate::core::{LetterCounts, MIN_WORD_LENGTH, max_possible_score};
use crate::dictionary::Dictionary;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// All playable words for one seed, plus the seed itself
///
/// Every member is lowercased, has at least [`MIN_WORD_LENGTH`] letters, no
/// more letters than the seed, and is a sub-multiset of the seed's letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidWordSet {
    seed: String,
    words: FxHashSet<String>,
}

impl ValidWordSet {
    /// The seed this set was built from (lowercased)
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words including the seed
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true: the seed is always a member
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words a player can submit (the seed does not count)
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.words.len() - 1
    }

    /// Members in no particular order, the seed included
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Members other than the seed, in no particular order
    pub fn playable(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(move |w| *w != self.seed)
    }

    /// Members sorted longest first, then alphabetically
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        sort_longest_first(&mut words);
        words
    }

    /// Sum of points over every member, the seed included
    #[must_use]
    pub fn max_possible_score(&self) -> u32 {
        max_possible_score(self.iter())
    }
}

/// Order words longest first, ties broken alphabetically
pub(crate) fn sort_longest_first(words: &mut [&str]) {
    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
}

/// Collect every dictionary word that can be formed from `seed`
///
/// A word qualifies when it has between [`MIN_WORD_LENGTH`] and `seed`'s
/// length letters and its letters are a sub-multiset of the seed's. The
/// (lowercased) seed is always included, so an empty dictionary yields a
/// single-word set. Dictionary entries are checked in parallel.
///
/// # Examples
/// ```
/// use word_from_word::dictionary::Dictionary;
/// use word_from_word::game::valid_words;
///
/// let dictionary = Dictionary::from_slice(&["стол", "стон", "сто", "толстосум"]);
/// let valid = valid_words("Толстосумы", &dictionary);
///
/// assert!(valid.contains("стол"));
/// assert!(valid.contains("толстосум"));
/// assert!(!valid.contains("сто")); // too short
/// assert!(valid.contains("толстосумы")); // the seed itself
/// ```
#[must_use]
pub fn valid_words(seed: &str, dictionary: &Dictionary) -> ValidWordSet {
    let seed = seed.to_lowercase();
    let seed_letters = LetterCounts::from_text(&seed);
    let max_len = seed_letters.total();

    let mut words: FxHashSet<String> = dictionary
        .words()
        .par_iter()
        .filter(|w| (MIN_WORD_LENGTH..=max_len).contains(&w.len()))
        .filter(|w| seed_letters.covers(w.text()))
        .map(|w| w.text().to_string())
        .collect();

    words.insert(seed.clone());

    debug!("seed {seed}: {} valid words", words.len());
    ValidWordSet { seed, words }
}

/// Submission check: is `word` (case-folded) in the set?
#[must_use]
pub fn is_valid(word: &str, valid: &ValidWordSet) -> bool {
    valid.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::can_form_word;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_slice(&["стол", "стон", "сто", "толстосум", "толстосумы"])
    }

    #[test]
    fn example_scenario() {
        let valid = valid_words("толстосумы", &sample_dictionary());

        assert!(valid.contains("стол"));
        assert!(valid.contains("толстосум"));
        assert!(valid.contains("толстосумы"));
        assert!(!valid.contains("сто"));
        // "стон" needs an 'н'
        assert!(!valid.contains("стон"));
        assert_eq!(valid.len(), 3);
        assert_eq!(valid.playable_count(), 2);
    }

    #[test]
    fn seed_always_member() {
        let valid = valid_words("СЛОВО", &sample_dictionary());
        assert!(valid.contains("слово"));
        assert_eq!(valid.seed(), "слово");
    }

    #[test]
    fn empty_dictionary_yields_seed_only() {
        let valid = valid_words("толстосумы", &Dictionary::default());
        assert_eq!(valid.len(), 1);
        assert_eq!(valid.playable_count(), 0);
        assert!(!valid.is_empty());
    }

    #[test]
    fn respects_length_bounds() {
        let dictionary = Dictionary::from_slice(&["сто", "стол", "столы", "толстосумы"]);
        let valid = valid_words("столы", &dictionary);

        for word in valid.iter() {
            let len = word.chars().count();
            assert!(len >= MIN_WORD_LENGTH, "{word} too short");
            assert!(len <= 5, "{word} longer than seed");
        }
        assert!(!valid.contains("толстосумы"));
    }

    #[test]
    fn members_are_sub_multisets() {
        let dictionary = Dictionary::embedded();
        let seed = "достопримечательность";
        let valid = valid_words(seed, &dictionary);

        assert!(valid.playable_count() > 0);
        for word in valid.iter() {
            assert!(can_form_word(seed, word), "{word} not formable from {seed}");
        }
    }

    #[test]
    fn duplicates_in_dictionary_are_collapsed() {
        let dictionary = Dictionary::from_slice(&["стол", "стол", "СТОЛ"]);
        let valid = valid_words("толстосумы", &dictionary);
        assert_eq!(valid.len(), 2);
    }

    #[test]
    fn no_hyphen_filtering_for_answers() {
        // A hyphen in the seed makes hyphenated answers formable
        let dictionary = Dictionary::from_slice(&["плащ-палатка", "палатка"]);
        let valid = valid_words("плащ-палатка", &dictionary);
        assert!(valid.contains("палатка"));
        assert!(valid.contains("плащ-палатка"));
    }

    #[test]
    fn playable_excludes_seed() {
        let valid = valid_words("толстосумы", &sample_dictionary());
        let mut playable: Vec<&str> = valid.playable().collect();
        playable.sort_unstable();
        assert_eq!(playable, vec!["стол", "толстосум"]);
    }

    #[test]
    fn sorted_longest_first() {
        let valid = valid_words("толстосумы", &sample_dictionary());
        assert_eq!(valid.sorted(), vec!["толстосумы", "толстосум", "стол"]);
    }

    #[test]
    fn max_score_includes_seed() {
        let valid = valid_words("толстосумы", &sample_dictionary());
        // стол 1 + толстосум 9 + толстосумы 10
        assert_eq!(valid.max_possible_score(), 20);
    }

    #[test]
    fn is_valid_case_folds() {
        let valid = valid_words("толстосумы", &sample_dictionary());
        assert!(is_valid("СТОЛ", &valid));
        assert!(!is_valid("стон", &valid));
    }
}
