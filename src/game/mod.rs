//! Word-from-word game engine
//!
//! Seed selection, valid word set construction and the per-round session.

pub mod config;
mod selector;
mod session;
mod valid_words;

pub use config::GameConfig;
pub use selector::{SeedSelection, SeedSource, select_seed};
pub use session::{Accepted, GameSession, GameSummary, SubmitError};
pub use valid_words::{ValidWordSet, is_valid, valid_words};
