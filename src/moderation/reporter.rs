//! Unknown-word reporters

use crate::game::GameSession;
use log::{info, warn};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// A rejected submission worth a reviewer's look
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWordReport {
    pub word: String,
    pub seed: String,
    /// Letter pool as shown to the player
    pub letters: String,
    pub reported_at: SystemTime,
}

impl UnknownWordReport {
    #[must_use]
    pub fn new(word: impl Into<String>, session: &GameSession) -> Self {
        Self {
            word: word.into(),
            seed: session.seed().text().to_string(),
            letters: session.letters().iter().collect(),
            reported_at: SystemTime::now(),
        }
    }

    /// One tab-separated line: unix seconds, word, seed, letters
    #[must_use]
    pub fn to_line(&self) -> String {
        let secs = self
            .reported_at
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        format!("{secs}\t{}\t{}\t{}", self.word, self.seed, self.letters)
    }
}

/// Destination for unknown-word reports
pub trait WordReporter {
    /// Deliver one report
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the report could not be delivered.
    fn report(&self, report: &UnknownWordReport) -> io::Result<()>;
}

/// Drops every report
pub struct NullReporter;

impl WordReporter for NullReporter {
    fn report(&self, _report: &UnknownWordReport) -> io::Result<()> {
        Ok(())
    }
}

/// Writes reports to the log at info level
pub struct LogReporter;

impl WordReporter for LogReporter {
    fn report(&self, report: &UnknownWordReport) -> io::Result<()> {
        info!(
            "unknown word '{}' (seed {}, pool {})",
            report.word, report.seed, report.letters
        );
        Ok(())
    }
}

/// Appends reports to a review queue file, one line each
pub struct QueueFileReporter {
    path: PathBuf,
}

impl QueueFileReporter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordReporter for QueueFileReporter {
    fn report(&self, report: &UnknownWordReport) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", report.to_line())
    }
}

/// Send a report and swallow any failure
///
/// Failures are logged; the caller carries on either way.
pub fn report_quietly(reporter: &dyn WordReporter, report: &UnknownWordReport) {
    if let Err(e) = reporter.report(report) {
        warn!("failed to report unknown word '{}': {e}", report.word);
    }
}
