//! Seed survey - dictionary-wide seed evaluation
//!
//! Builds the valid word set of every eligible seed and reports which seeds
//! hide the most words.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::game::valid_words;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Width of each bucket in the playable-word distribution
pub const BUCKET_WIDTH: usize = 10;

/// Result for a single seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStats {
    pub seed: String,
    pub playable_count: usize,
    pub max_possible_score: u32,
}

/// Statistics from surveying seeds
#[derive(Debug)]
pub struct SurveyStatistics {
    pub seeds_scanned: usize,
    /// Seeds with the most playable words, best first
    pub top_seeds: Vec<SeedStats>,
    /// Seeds per bucket of playable-word counts, keyed by bucket start
    pub distribution: BTreeMap<usize, usize>,
    pub average_playable: f64,
    /// Seeds yielding at least `min_valid_words` playable words
    pub qualifying: usize,
    pub total_time: Duration,
}

/// Survey every hyphen-free seed of at least `min_length` letters
///
/// `limit` caps how many seeds are scanned (in dictionary order) and `top`
/// how many of the best seeds are kept.
#[must_use]
pub fn run_survey(
    dictionary: &Dictionary,
    min_length: usize,
    min_valid_words: usize,
    limit: Option<usize>,
    top: usize,
) -> SurveyStatistics {
    let seeds: Vec<&Word> = dictionary
        .iter()
        .filter(|w| w.len() >= min_length && !w.is_hyphenated())
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🔎 Surveying {} seeds...", seeds.len());

    let pb = ProgressBar::new(seeds.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(
                |_| ProgressStyle::default_bar(),
                |style| style.progress_chars("█▓▒░"),
            ),
    );

    let start = Instant::now();

    let mut results: Vec<SeedStats> = seeds
        .par_iter()
        .map(|seed| {
            let valid = valid_words(seed.text(), dictionary);
            pb.inc(1);
            SeedStats {
                seed: seed.text().to_string(),
                playable_count: valid.playable_count(),
                max_possible_score: valid.max_possible_score(),
            }
        })
        .collect();

    pb.finish_with_message("done");
    let total_time = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for stats in &results {
        let bucket = stats.playable_count / BUCKET_WIDTH * BUCKET_WIDTH;
        *distribution.entry(bucket).or_insert(0) += 1;
    }

    let seeds_scanned = results.len();
    let total_playable: usize = results.iter().map(|s| s.playable_count).sum();
    let average_playable = if seeds_scanned == 0 {
        0.0
    } else {
        total_playable as f64 / seeds_scanned as f64
    };
    let qualifying = results
        .iter()
        .filter(|s| s.playable_count >= min_valid_words)
        .count();

    results.sort_by(|a, b| {
        b.playable_count
            .cmp(&a.playable_count)
            .then_with(|| a.seed.cmp(&b.seed))
    });
    results.truncate(top);

    SurveyStatistics {
        seeds_scanned,
        top_seeds: results,
        distribution,
        average_playable,
        qualifying,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_slice(&[
            "стол",
            "тост",
            "сумо",
            "толстосум",
            "толстосумы",
            "электроэнергетика",
            "плащ-палатка",
        ])
    }

    #[test]
    fn survey_ranks_seeds() {
        let stats = run_survey(&sample_dictionary(), 9, 1, None, 5);

        assert_eq!(stats.seeds_scanned, 3);
        assert_eq!(stats.top_seeds[0].seed, "толстосумы");
        assert_eq!(stats.top_seeds[0].playable_count, 4);
        assert_eq!(stats.qualifying, 2);
    }

    #[test]
    fn survey_skips_hyphenated_and_short() {
        let stats = run_survey(&sample_dictionary(), 9, 0, None, 10);
        assert!(stats.top_seeds.iter().all(|s| !s.seed.contains('-')));
        assert!(stats.top_seeds.iter().all(|s| s.seed.chars().count() >= 9));
    }

    #[test]
    fn distribution_sums_to_seeds() {
        let stats = run_survey(&sample_dictionary(), 4, 0, None, 3);
        let total: usize = stats.distribution.values().sum();
        assert_eq!(total, stats.seeds_scanned);
        assert_eq!(stats.top_seeds.len(), 3);
    }

    #[test]
    fn survey_respects_limit() {
        let stats = run_survey(&Dictionary::embedded(), 4, 0, Some(5), 10);
        assert_eq!(stats.seeds_scanned, 5);
        assert!(stats.top_seeds.len() <= 5);
    }

    #[test]
    fn survey_empty_dictionary() {
        let stats = run_survey(&Dictionary::default(), 4, 0, None, 10);
        assert_eq!(stats.seeds_scanned, 0);
        assert!(stats.top_seeds.is_empty());
        assert!(stats.average_playable.abs() < f64::EPSILON);
    }
}
