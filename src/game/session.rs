//! Game session state
//!
//! One round of play: the seed, its shuffled letter pool, the words found so
//! far, the running score and the clock. A session is owned by a single
//! player; concurrent players each get their own.

use super::config::GameConfig;
use super::selector::{SeedSelection, SeedSource, select_seed};
use super::valid_words::{ValidWordSet, sort_longest_first};
use crate::core::{
    MIN_WORD_LENGTH, RankProgress, RankTable, Word, can_form_word, rank_thresholds, score_of,
};
use crate::dictionary::{Dictionary, DictionaryError};
use log::info;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why a submission was turned down
///
/// Every rejection leaves the score and found words untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("the game is over")]
    GameOver,
    #[error("words need at least {min} letters, got {len}", min = MIN_WORD_LENGTH)]
    TooShort { len: usize },
    #[error("'{0}' has already been found")]
    Duplicate(String),
    #[error("'{0}' is the seed word itself")]
    SeedWord(String),
    #[error("'{0}' uses letters that are not in the pool")]
    NotFormable(String),
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
}

/// A submission that was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub points: u32,
    /// Score after this word
    pub score: u32,
    /// Set when the word lifted the player into a new tier
    pub new_rank: Option<&'static str>,
}

/// End-of-round report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub seed: String,
    pub score: u32,
    pub max_possible_score: u32,
    pub rank: &'static str,
    /// Words found, in the order they were submitted
    pub found: Vec<String>,
    /// Playable words not found, longest first
    pub missed: Vec<String>,
    /// Words the player could have submitted (the seed excluded)
    pub playable_count: usize,
    pub elapsed: Duration,
}

/// A single round of the word-from-word game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    seed: Word,
    seed_source: SeedSource,
    letters: Vec<char>,
    valid_words: ValidWordSet,
    max_score: u32,
    ranks: RankTable,
    found: Vec<String>,
    used: FxHashSet<String>,
    score: u32,
    started_at: Instant,
    ended_at: Option<Instant>,
}

impl GameSession {
    /// Pick a seed from `dictionary` and start a round
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the dictionary has no words.
    pub fn start<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, DictionaryError> {
        let selection = select_seed(
            dictionary,
            config.min_seed_length,
            config.min_valid_words,
            rng,
        )?;
        Ok(Self::from_selection(selection, config, rng))
    }

    /// Start a round from an already chosen seed
    #[must_use]
    pub fn from_selection<R: Rng + ?Sized>(
        selection: SeedSelection,
        config: GameConfig,
        rng: &mut R,
    ) -> Self {
        let SeedSelection {
            seed,
            valid_words,
            source,
        } = selection;

        let max_score = valid_words.max_possible_score();
        let ranks = rank_thresholds(max_score, seed.text());

        let mut letters: Vec<char> = seed.text().chars().collect();
        letters.shuffle(rng);

        info!(
            "new game: seed {seed}, {} playable words, max score {max_score}",
            valid_words.playable_count()
        );

        Self {
            config,
            seed,
            seed_source: source,
            letters,
            valid_words,
            max_score,
            ranks,
            found: Vec::new(),
            used: FxHashSet::default(),
            score: 0,
            started_at: Instant::now(),
            ended_at: None,
        }
    }

    /// Discard this round and start a new one with the same settings
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the dictionary has no words; the
    /// current round is left as it was.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        dictionary: &Dictionary,
        rng: &mut R,
    ) -> Result<(), DictionaryError> {
        *self = Self::start(dictionary, self.config.clone(), rng)?;
        Ok(())
    }

    /// Try to score a word
    ///
    /// The input is trimmed and lowercased. Checks run in order: round over,
    /// too short, already found, the seed itself, letters outside the pool,
    /// not a valid word.
    ///
    /// # Errors
    ///
    /// Returns the matching `SubmitError`; score and found words are unchanged.
    pub fn submit(&mut self, input: &str) -> Result<Accepted, SubmitError> {
        if self.is_over() {
            self.end();
            return Err(SubmitError::GameOver);
        }

        let word = input.trim().to_lowercase();
        let len = word.chars().count();

        if len < MIN_WORD_LENGTH {
            return Err(SubmitError::TooShort { len });
        }
        if self.used.contains(&word) {
            return Err(SubmitError::Duplicate(word));
        }
        if word == self.seed.text() {
            return Err(SubmitError::SeedWord(word));
        }
        if !can_form_word(self.seed.text(), &word) {
            return Err(SubmitError::NotFormable(word));
        }
        if !self.valid_words.contains(&word) {
            return Err(SubmitError::NotInDictionary(word));
        }

        let rank_before = self.ranks.index_for(self.score);
        let points = score_of(&word);
        self.score += points;
        self.used.insert(word.clone());
        self.found.push(word.clone());

        let rank_after = self.ranks.index_for(self.score);
        let new_rank = (rank_after > rank_before).then(|| self.ranks.current(self.score).name);

        Ok(Accepted {
            word,
            points,
            score: self.score,
            new_rank,
        })
    }

    /// Stop accepting words; score and found words are kept
    pub fn end(&mut self) {
        if self.ended_at.is_none() {
            let now = Instant::now();
            let ended_at = self
                .config
                .time_limit
                .map_or(now, |limit| now.min(self.started_at + limit));
            self.ended_at = Some(ended_at);
            info!("game over: {} points, {} words", self.score, self.found.len());
        }
    }

    /// Whether the round was ended or its time ran out
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.ended_at.is_some()
            || self
                .config
                .time_limit
                .is_some_and(|limit| self.started_at.elapsed() >= limit)
    }

    /// Time played, capped at the time limit
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let elapsed = self.ended_at.map_or_else(
            || self.started_at.elapsed(),
            |end| end.duration_since(self.started_at),
        );
        self.config
            .time_limit
            .map_or(elapsed, |limit| elapsed.min(limit))
    }

    /// Time left, or `None` for an untimed round
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.config
            .time_limit
            .map(|limit| limit.saturating_sub(self.elapsed()))
    }

    #[must_use]
    pub const fn seed(&self) -> &Word {
        &self.seed
    }

    #[must_use]
    pub const fn seed_source(&self) -> SeedSource {
        self.seed_source
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed's letters in their current shuffled order
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Re-jumble the letter pool
    pub fn shuffle_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }

    #[must_use]
    pub const fn valid_words(&self) -> &ValidWordSet {
        &self.valid_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn max_possible_score(&self) -> u32 {
        self.max_score
    }

    /// Found words in submission order
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Found words grouped by length, shortest group first
    #[must_use]
    pub fn found_by_length(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for word in &self.found {
            groups
                .entry(word.chars().count())
                .or_default()
                .push(word.as_str());
        }
        groups
    }

    #[must_use]
    pub const fn thresholds(&self) -> &RankTable {
        &self.ranks
    }

    /// Name of the tier reached so far
    #[must_use]
    pub fn rank(&self) -> &'static str {
        self.ranks.current(self.score).name
    }

    #[must_use]
    pub fn rank_progress(&self) -> RankProgress {
        self.ranks.progress(self.score)
    }

    /// Playable words not yet found, longest first
    #[must_use]
    pub fn missed_words(&self) -> Vec<&str> {
        let mut missed: Vec<&str> = self
            .valid_words
            .playable()
            .filter(|w| !self.used.contains(*w))
            .collect();
        sort_longest_first(&mut missed);
        missed
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            seed: self.seed.text().to_string(),
            score: self.score,
            max_possible_score: self.max_score,
            rank: self.rank(),
            found: self.found.clone(),
            missed: self
                .missed_words()
                .into_iter()
                .map(str::to_string)
                .collect(),
            playable_count: self.valid_words.playable_count(),
            elapsed: self.elapsed(),
        }
    }
}
