//! Letter frequency weights
//!
//! Relative frequency (percent of running text) of each Russian letter. The
//! sum over a seed word's letters is its rarity: seeds built from common
//! letters sum high, seeds with rare letters sum low.

/// Frequency weight per lowercase letter, most common first
pub const LETTER_FREQUENCIES: [(char, f64); 33] = [
    ('о', 10.97),
    ('е', 8.45),
    ('а', 8.01),
    ('и', 7.35),
    ('н', 6.70),
    ('т', 6.26),
    ('с', 5.47),
    ('р', 4.73),
    ('в', 4.54),
    ('л', 4.40),
    ('к', 3.49),
    ('м', 3.21),
    ('д', 2.98),
    ('п', 2.81),
    ('у', 2.62),
    ('я', 2.01),
    ('ы', 1.90),
    ('ь', 1.74),
    ('г', 1.70),
    ('з', 1.65),
    ('б', 1.59),
    ('ч', 1.44),
    ('й', 1.21),
    ('х', 0.97),
    ('ж', 0.94),
    ('ш', 0.73),
    ('ю', 0.64),
    ('ц', 0.48),
    ('щ', 0.36),
    ('э', 0.32),
    ('ф', 0.26),
    ('ъ', 0.04),
    ('ё', 0.04),
];

/// Weight of a single letter; letters outside the table weigh nothing
#[must_use]
pub fn letter_weight(letter: char) -> f64 {
    LETTER_FREQUENCIES
        .iter()
        .find(|&&(l, _)| l == letter)
        .map_or(0.0, |&(_, weight)| weight)
}

/// Sum of the weights of every (lowercased) letter in `word`
///
/// # Examples
/// ```
/// use word_from_word::core::rarity;
///
/// assert!((rarity("Стол") - rarity("стол")).abs() < f64::EPSILON);
/// assert!(rarity("").abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn rarity(word: &str) -> f64 {
    word.chars()
        .flat_map(char::to_lowercase)
        .map(letter_weight)
        .sum()
}
