//! Word check command
//!
//! Answers "would this word count for this seed, and for how much?"

use crate::core::{Word, can_form_word};
use crate::dictionary::Dictionary;
use crate::game::{GameConfig, GameSession, SeedSelection, SeedSource, valid_words};

/// Result of checking a word against a seed
pub struct CheckResult {
    pub seed: String,
    pub word: String,
    /// Letters of the word fit inside the seed's letters
    pub formable: bool,
    /// Word appears in the dictionary at all
    pub in_dictionary: bool,
    /// Points the word would earn, or why it would be rejected
    pub outcome: Result<u32, String>,
}

/// Check `word` against `seed` as a fresh submission would be judged
///
/// # Errors
///
/// Returns an error if the seed is not a valid word.
pub fn check_word(seed: &str, word: &str, dictionary: &Dictionary) -> Result<CheckResult, String> {
    let seed = Word::new(seed.trim()).map_err(|e| format!("Invalid seed: {e}"))?;
    let word = word.trim().to_lowercase();

    let selection = SeedSelection {
        valid_words: valid_words(seed.text(), dictionary),
        seed: seed.clone(),
        source: SeedSource::Qualified,
    };
    let mut session = GameSession::from_selection(
        selection,
        GameConfig::default().with_time_limit(None),
        &mut rand::rng(),
    );

    let outcome = session
        .submit(&word)
        .map(|accepted| accepted.points)
        .map_err(|e| e.to_string());

    Ok(CheckResult {
        formable: can_form_word(seed.text(), &word),
        in_dictionary: dictionary.contains(&word),
        seed: seed.text().to_string(),
        word,
        outcome,
    })
}
