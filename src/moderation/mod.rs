//! Moderation hooks
//!
//! Words a player submits that are missing from the dictionary can be handed
//! to a reviewer. Reporting is fire-and-forget: the game never waits on it and
//! never fails because of it. Approved words are added back with
//! [`crate::dictionary::loader::approve_word`].

mod reporter;

pub use reporter::{
    LogReporter, NullReporter, QueueFileReporter, UnknownWordReport, WordReporter,
    report_quietly,
};
