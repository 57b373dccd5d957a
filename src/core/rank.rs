//! Rank tiers
//!
//! Ten named tiers whose point thresholds scale with the best achievable score
//! and with how rare the seed word's letters are.

use super::frequency::rarity;

/// Tier names, lowest to highest
pub const TIER_NAMES: [&str; 10] = [
    "Новичок",
    "Хорошее начало",
    "Разогрев",
    "Неплохо",
    "Хорошо",
    "Отлично",
    "Мастер",
    "Профи",
    "Гений",
    "Сверхразум",
];

/// Share of the top threshold required for each tier (percent)
pub const TIER_PERCENTS: [u32; 10] = [0, 2, 5, 8, 15, 25, 40, 50, 70, 100];

const BASE_TOP_POINTS: f64 = 300.0;
const MAX_SCORE_FACTOR: f64 = 0.01;
const RARITY_BASELINE: f64 = 20.0;
const MIN_TOP_POINTS: f64 = 100.0;

/// A named tier and the score needed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankThreshold {
    pub name: &'static str,
    pub min_points: u32,
}

/// Where a score sits within the tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankProgress {
    pub current: RankThreshold,
    pub index: usize,
    pub next: Option<RankThreshold>,
    /// Points still needed for the next tier (0 at the top)
    pub points_to_next: u32,
    /// Points still needed for the highest tier
    pub points_to_top: u32,
}

/// Ordered tier thresholds for one seed
#[derive(Debug, Clone, PartialEq)]
pub struct RankTable {
    thresholds: Vec<RankThreshold>,
    top_points: f64,
}

/// Points required for the highest tier
///
/// `300 + 1% of max_score`, raised by how far the seed's rarity falls below
/// the baseline of 20 and lowered by how far it exceeds it, never below 100.
#[must_use]
pub fn top_points(max_score: u32, seed: &str) -> f64 {
    let adjustment = RARITY_BASELINE - rarity(seed);
    let points = BASE_TOP_POINTS + MAX_SCORE_FACTOR * f64::from(max_score) + adjustment;
    points.max(MIN_TOP_POINTS)
}

/// Build the tier thresholds for a seed and its best achievable score
///
/// Deterministic: the same inputs always give the same table.
///
/// # Examples
/// ```
/// use word_from_word::core::rank_thresholds;
///
/// let ranks = rank_thresholds(0, "");
/// assert_eq!(ranks.thresholds().len(), 10);
/// assert_eq!(ranks.thresholds()[0].min_points, 0);
/// assert_eq!(ranks.thresholds()[9].min_points, 320);
/// ```
#[must_use]
pub fn rank_thresholds(max_score: u32, seed: &str) -> RankTable {
    let top = top_points(max_score, seed);

    let thresholds = TIER_NAMES
        .iter()
        .zip(TIER_PERCENTS)
        .map(|(&name, percent)| RankThreshold {
            name,
            min_points: (top * f64::from(percent) / 100.0).round() as u32,
        })
        .collect();

    RankTable {
        thresholds,
        top_points: top,
    }
}

impl RankTable {
    /// All tiers, lowest first
    #[must_use]
    pub fn thresholds(&self) -> &[RankThreshold] {
        &self.thresholds
    }

    /// Unrounded points of the highest tier
    #[must_use]
    pub const fn top_points(&self) -> f64 {
        self.top_points
    }

    /// Index of the highest tier whose threshold `score` has reached
    ///
    /// Falls back to the lowest tier when none qualifies.
    #[must_use]
    pub fn index_for(&self, score: u32) -> usize {
        self.thresholds
            .iter()
            .rposition(|t| t.min_points <= score)
            .unwrap_or(0)
    }

    /// Tier reached with `score`
    #[must_use]
    pub fn current(&self, score: u32) -> RankThreshold {
        self.thresholds[self.index_for(score)]
    }

    /// Current tier plus distance to the next and top tiers
    #[must_use]
    pub fn progress(&self, score: u32) -> RankProgress {
        let index = self.index_for(score);
        let next = self.thresholds.get(index + 1).copied();
        let top = self.thresholds.last().map_or(0, |t| t.min_points);

        RankProgress {
            current: self.thresholds[index],
            index,
            next,
            points_to_next: next.map_or(0, |n| n.min_points.saturating_sub(score)),
            points_to_top: top.saturating_sub(score),
        }
    }
}

/// Name of the tier reached with `score`
#[must_use]
pub fn current_rank(score: u32, max_score: u32, seed: &str) -> &'static str {
    rank_thresholds(max_score, seed).current(score).name
}
