//! Core domain types for the word-from-word puzzle
//!
//! Pure functions over words and letters: the sub-multiset check, scoring,
//! letter rarity and rank tiers. Nothing here touches I/O or randomness.

mod frequency;
mod letters;
mod rank;
mod scoring;
mod word;

pub use frequency::{LETTER_FREQUENCIES, letter_weight, rarity};
pub use letters::{LetterCounts, can_form_word};
pub use rank::{
    RankProgress, RankTable, RankThreshold, TIER_NAMES, TIER_PERCENTS, current_rank,
    rank_thresholds, top_points,
};
pub use scoring::{MIN_WORD_LENGTH, max_possible_score, score_for_length, score_of};
pub use word::{HYPHEN, Word, WordError};
