//! Seed word selection
//!
//! Picks a long seed word at random, preferring seeds that hide enough
//! playable words, with a fallback chain that always terminates.

use super::valid_words::{ValidWordSet, valid_words};
use crate::core::Word;
use crate::dictionary::{Dictionary, DictionaryError};
use log::{debug, trace, warn};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Which step of the selection produced the seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Long enough, hyphen-free, and yields enough playable words
    Qualified,
    /// Long enough and hyphen-free, but no candidate met the word-count minimum
    Unqualified,
    /// No hyphen-free candidate; any long-enough word was used
    LengthOnly,
    /// Nothing long enough; any dictionary word was used
    AnyWord,
}

/// A chosen seed together with its valid word set
#[derive(Debug, Clone)]
pub struct SeedSelection {
    pub seed: Word,
    pub valid_words: ValidWordSet,
    pub source: SeedSource,
}

/// Select a seed word from `dictionary`
///
/// Candidates are hyphen-free words of at least `min_length` letters, visited
/// in a uniformly shuffled order. The first whose valid word set (excluding
/// the seed itself) holds at least `min_valid_words` entries wins.
///
/// If none qualifies, a random candidate is used anyway. If there are no
/// candidates, a random word of at least `min_length` letters (hyphens
/// allowed) is used, and failing that any random word.
///
/// The dictionary is never modified, so this can be called again for a
/// replay.
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if the dictionary has no words.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_from_word::dictionary::Dictionary;
/// use word_from_word::game::select_seed;
///
/// let dictionary = Dictionary::from_slice(&["стол", "толстосум", "толстосумы"]);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let selection = select_seed(&dictionary, 9, 1, &mut rng).unwrap();
/// assert!(selection.seed.len() >= 9);
/// assert!(selection.valid_words.playable_count() >= 1);
/// ```
pub fn select_seed<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    min_length: usize,
    min_valid_words: usize,
    rng: &mut R,
) -> Result<SeedSelection, DictionaryError> {
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty);
    }

    let mut candidates: Vec<&Word> = dictionary
        .iter()
        .filter(|w| w.len() >= min_length && !w.is_hyphenated())
        .collect();
    candidates.shuffle(rng);

    debug!(
        "{} seed candidates of {}+ letters",
        candidates.len(),
        min_length
    );

    for (attempt, &candidate) in candidates.iter().enumerate() {
        let valid = valid_words(candidate.text(), dictionary);
        if valid.playable_count() >= min_valid_words {
            debug!(
                "seed {candidate} accepted after {} attempt(s) with {} playable words",
                attempt + 1,
                valid.playable_count()
            );
            return Ok(selection(candidate, valid, SeedSource::Qualified));
        }
        trace!(
            "seed {candidate} rejected: {} < {min_valid_words} playable words",
            valid.playable_count()
        );
    }

    let (seed, source) = if let Some(&candidate) = candidates.choose(rng) {
        (candidate, SeedSource::Unqualified)
    } else {
        let long_words: Vec<&Word> = dictionary
            .iter()
            .filter(|w| w.len() >= min_length)
            .collect();

        match long_words.choose(rng) {
            Some(&word) => (word, SeedSource::LengthOnly),
            None => (
                dictionary
                    .words()
                    .choose(rng)
                    .ok_or(DictionaryError::Empty)?,
                SeedSource::AnyWord,
            ),
        }
    };

    warn!("no seed met the requirements, falling back to {seed} ({source:?})");
    Ok(selection(seed, valid_words(seed.text(), dictionary), source))
}

fn selection(seed: &Word, valid_words: ValidWordSet, source: SeedSource) -> SeedSelection {
    SeedSelection {
        seed: seed.clone(),
        valid_words,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_slice(&[
            "стол",
            "стон",
            "сто",
            "толстосум",
            "толстосумы",
            "электроэнергетика",
            "плащ-палатка",
        ])
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = select_seed(&Dictionary::default(), 5, 0, &mut rng);
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn seed_meets_length_and_word_count() {
        let dictionary = sample_dictionary();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select_seed(&dictionary, 10, 1, &mut rng).unwrap();

            assert_eq!(selection.source, SeedSource::Qualified);
            assert_eq!(selection.seed.text(), "толстосумы");
            assert!(selection.valid_words.playable_count() >= 1);
        }
    }

    #[test]
    fn repeated_selection_satisfies_constraints() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..5 {
            let selection = select_seed(&dictionary, 15, 3, &mut rng).unwrap();
            assert!(selection.seed.len() >= 15);
            assert!(!selection.seed.is_hyphenated());
            assert!(selection.valid_words.playable_count() >= 3);
        }
    }

    #[test]
    fn hyphenated_words_are_not_seed_candidates() {
        let dictionary = Dictionary::from_slice(&["плащ-палатка", "палатка", "стол"]);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select_seed(&dictionary, 7, 0, &mut rng).unwrap();
            assert_eq!(selection.seed.text(), "палатка");
        }
    }

    #[test]
    fn unmet_word_count_falls_back_to_candidate() {
        let dictionary = sample_dictionary();
        let mut rng = StdRng::seed_from_u64(3);

        let selection = select_seed(&dictionary, 10, 1_000, &mut rng).unwrap();

        assert_eq!(selection.source, SeedSource::Unqualified);
        assert!(selection.seed.len() >= 10);
        assert!(!selection.seed.is_hyphenated());
        assert!(selection.valid_words.contains(selection.seed.text()));
    }

    #[test]
    fn only_hyphenated_long_words_falls_back_to_length_only() {
        let dictionary = Dictionary::from_slice(&["плащ-палатка", "стол"]);
        let mut rng = StdRng::seed_from_u64(5);

        let selection = select_seed(&dictionary, 10, 0, &mut rng).unwrap();

        assert_eq!(selection.source, SeedSource::LengthOnly);
        assert_eq!(selection.seed.text(), "плащ-палатка");
    }

    #[test]
    fn nothing_long_enough_falls_back_to_any_word() {
        let dictionary = Dictionary::from_slice(&["стол", "стон"]);
        let mut rng = StdRng::seed_from_u64(9);

        let selection = select_seed(&dictionary, 30, 0, &mut rng).unwrap();

        assert_eq!(selection.source, SeedSource::AnyWord);
        assert!(dictionary.contains(selection.seed.text()));
    }

    #[test]
    fn dictionary_is_untouched() {
        let dictionary = sample_dictionary();
        let before: Vec<String> = dictionary.iter().map(ToString::to_string).collect();

        let mut rng = StdRng::seed_from_u64(11);
        let _ = select_seed(&dictionary, 4, 0, &mut rng).unwrap();
        let _ = select_seed(&dictionary, 4, 0, &mut rng).unwrap();

        let after: Vec<String> = dictionary.iter().map(ToString::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn selection_is_not_biased_to_dictionary_order() {
        let dictionary = Dictionary::from_slice(&["слово", "стена", "среда", "совет", "сказка"]);
        let mut seen = std::collections::HashSet::new();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select_seed(&dictionary, 5, 0, &mut rng).unwrap();
            seen.insert(selection.seed.text().to_string());
        }

        assert!(seen.len() > 1);
    }
}
