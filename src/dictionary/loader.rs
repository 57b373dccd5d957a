//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! plus the moderator action that adds an approved word to a dictionary file.

use crate::core::Word;
use log::{debug, info};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_from_word::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(&path)?;
    let words = parse_lines(&content);

    debug!(
        "loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_from_word::dictionary::loader::words_from_slice;
/// use word_from_word::dictionary::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Add an approved word to a dictionary file
///
/// The file is read (a missing file counts as empty), the word appended if it
/// is not already present, and the list written back sorted. The rewrite goes
/// through a temporary file in the same directory so readers never observe a
/// half-written dictionary.
///
/// Returns `true` if the word was added, `false` if it was already there.
///
/// # Errors
///
/// Returns `InvalidInput` if `word` is not a valid dictionary word, or any
/// I/O error from reading or replacing the file.
pub fn approve_word<P: AsRef<Path>>(path: P, word: &str) -> io::Result<bool> {
    let path = path.as_ref();
    let word = Word::new(word.trim())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    let mut entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect();

    if entries.iter().any(|e| e == word.text()) {
        debug!("{word} already present in {}", path.display());
        return Ok(false);
    }

    entries.push(word.text().to_string());
    entries.sort();
    entries.dedup();

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp_file = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        for entry in &entries {
            writeln!(writer, "{entry}")?;
        }
        writer.flush()?;
    }
    temp_file.persist(path)?;

    info!("approved {word} into {}", path.display());
    Ok(true)
}
