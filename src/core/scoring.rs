//! Point values for found words

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 4;

/// Points for a word of `len` letters
///
/// Four-letter words are worth a single point; longer words score one point
/// per letter. Anything shorter than [`MIN_WORD_LENGTH`] scores nothing.
#[inline]
#[must_use]
pub const fn score_for_length(len: usize) -> u32 {
    match len {
        0..MIN_WORD_LENGTH => 0,
        MIN_WORD_LENGTH => 1,
        _ => len as u32,
    }
}

/// Points for a single word
///
/// Callers reject words shorter than [`MIN_WORD_LENGTH`] before scoring;
/// such words score 0 here.
///
/// # Examples
/// ```
/// use word_from_word::core::score_of;
///
/// assert_eq!(score_of("стол"), 1);
/// assert_eq!(score_of("толстосум"), 9);
/// ```
#[must_use]
pub fn score_of(word: &str) -> u32 {
    score_for_length(word.chars().count())
}

/// Sum of points over every word of at least [`MIN_WORD_LENGTH`] letters
#[must_use]
pub fn max_possible_score<'a>(words: impl IntoIterator<Item = &'a str>) -> u32 {
    words
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LENGTH)
        .map(score_of)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_letters_score_one() {
        assert_eq!(score_of("стол"), 1);
        assert_eq!(score_of("СТОН"), 1);
    }

    #[test]
    fn longer_words_score_per_letter() {
        assert_eq!(score_of("слово"), 5);
        assert_eq!(score_of("толстосум"), 9);
        assert_eq!(score_of("толстосумы"), 10);
    }

    #[test]
    fn short_words_score_nothing() {
        assert_eq!(score_of("сто"), 0);
        assert_eq!(score_of(""), 0);
    }

    #[test]
    fn scoring_is_monotonic_from_five() {
        assert!(score_for_length(4) <= score_for_length(5));
        for len in 5..30 {
            assert!(score_for_length(len) < score_for_length(len + 1));
        }
    }

    #[test]
    fn max_score_skips_short_words() {
        let words = ["стол", "стон", "сто", "толстосум", "толстосумы"];
        // 1 + 1 + 0 + 9 + 10
        assert_eq!(max_possible_score(words), 21);
    }

    #[test]
    fn max_score_empty() {
        assert_eq!(max_possible_score(std::iter::empty()), 0);
    }
}
