//! Word from Word
//!
//! A word-from-word puzzle engine: pick a long seed word, then find every
//! dictionary word that can be spelled from its letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_from_word::core::can_form_word;
//! use word_from_word::dictionary::Dictionary;
//! use word_from_word::game::{is_valid, valid_words};
//!
//! assert!(can_form_word("толстосумы", "стол"));
//!
//! let dictionary = Dictionary::from_slice(&["стол", "стон", "толстосумы"]);
//! let valid = valid_words("толстосумы", &dictionary);
//! assert!(is_valid("стол", &valid));
//! assert!(!is_valid("стон", &valid));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Seed selection, valid words and sessions
pub mod game;

// Unknown-word reporting
pub mod moderation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
