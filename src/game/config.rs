//! Game session settings

use std::time::Duration;

/// Default minimum seed length in letters
pub const DEFAULT_MIN_SEED_LENGTH: usize = 15;

/// Default round length (7 minutes)
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(7 * 60);

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seeds must have at least this many letters
    pub min_seed_length: usize,
    /// Seeds must yield at least this many playable words (0 disables the check)
    pub min_valid_words: usize,
    /// Round length; `None` means untimed
    pub time_limit: Option<Duration>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(min_seed_length: usize) -> Self {
        Self {
            min_seed_length,
            min_valid_words: 0,
            time_limit: Some(DEFAULT_TIME_LIMIT),
        }
    }

    #[must_use]
    pub const fn with_min_valid_words(mut self, min_valid_words: usize) -> Self {
        self.min_valid_words = min_valid_words;
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEED_LENGTH)
    }
}
