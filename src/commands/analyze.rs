//! Seed analysis command
//!
//! Reports how many words hide in a seed, what they are worth, and where the
//! rank tiers fall.

use crate::core::{RankTable, Word, rank_thresholds, rarity};
use crate::dictionary::Dictionary;
use crate::game::valid_words;
use std::collections::BTreeMap;

/// How many of the longest words to keep in the report
const LONGEST_SHOWN: usize = 10;

/// Result of analyzing a seed
pub struct AnalysisResult {
    pub seed: String,
    pub playable_count: usize,
    pub max_possible_score: u32,
    pub rarity: f64,
    pub ranks: RankTable,
    /// Playable word count per word length
    pub by_length: BTreeMap<usize, usize>,
    pub longest: Vec<String>,
}

/// Analyze a seed word against a dictionary
///
/// The seed does not need to be in the dictionary.
///
/// # Errors
///
/// Returns an error if the seed is not a valid word.
pub fn analyze_seed(seed: &str, dictionary: &Dictionary) -> Result<AnalysisResult, String> {
    let seed = Word::new(seed.trim()).map_err(|e| format!("Invalid seed: {e}"))?;
    let valid = valid_words(seed.text(), dictionary);

    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for word in valid.playable() {
        *by_length.entry(word.chars().count()).or_insert(0) += 1;
    }

    let max_possible_score = valid.max_possible_score();
    let longest = valid
        .sorted()
        .into_iter()
        .filter(|&w| w != seed.text())
        .take(LONGEST_SHOWN)
        .map(str::to_string)
        .collect();

    Ok(AnalysisResult {
        seed: seed.text().to_string(),
        playable_count: valid.playable_count(),
        max_possible_score,
        rarity: rarity(seed.text()),
        ranks: rank_thresholds(max_possible_score, seed.text()),
        by_length,
        longest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_slice(&["стол", "стон", "сто", "тост", "толстосум", "толстосумы"])
    }

    #[test]
    fn analyze_valid_seed() {
        let result = analyze_seed("толстосумы", &sample_dictionary()).unwrap();

        assert_eq!(result.seed, "толстосумы");
        assert_eq!(result.playable_count, 3);
        // стол 1 + тост 1 + толстосум 9 + толстосумы 10
        assert_eq!(result.max_possible_score, 21);
        assert_eq!(result.longest, vec!["толстосум", "стол", "тост"]);
        assert_eq!(result.by_length.get(&4), Some(&2));
        assert_eq!(result.by_length.get(&9), Some(&1));
    }

    #[test]
    fn analyze_seed_outside_dictionary() {
        let result = analyze_seed("СТОЛЫ", &sample_dictionary()).unwrap();
        assert_eq!(result.seed, "столы");
        assert_eq!(result.playable_count, 1);
    }

    #[test]
    fn analyze_invalid_seed() {
        assert!(analyze_seed("", &sample_dictionary()).is_err());
        assert!(analyze_seed("ст0л", &sample_dictionary()).is_err());
    }

    #[test]
    fn rank_table_matches_max_score() {
        let result = analyze_seed("толстосумы", &sample_dictionary()).unwrap();
        assert_eq!(result.ranks, rank_thresholds(21, "толстосумы"));
        assert!(result.rarity > 20.0);
    }
}
