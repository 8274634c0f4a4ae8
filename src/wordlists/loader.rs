//! Target pools for a randomly chosen puzzle
//!
//! A pool is either the built-in greetings or a word file with one word per
//! line. Blank lines and `#` comments are ignored, anything else that is not
//! a 5-letter word is skipped with a warning, and repeats count once so every
//! distinct word is equally likely.

use super::GREETINGS;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Read the candidate targets listed in a word file
///
/// # Errors
/// Returns an I/O error if the file cannot be opened or read.
pub fn load_targets<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let pool = read_targets(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), words = pool.len(), "target pool loaded");
    Ok(pool)
}

/// Collect distinct targets from `reader`, in first-seen order
///
/// # Errors
/// Returns any I/O error from reading `reader`.
pub fn read_targets<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut seen = FxHashSet::default();
    let mut pool = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        match Word::new(entry) {
            Ok(word) => {
                if seen.insert(word) {
                    pool.push(word);
                }
            }
            Err(err) => warn!(line = index + 1, entry, %err, "skipping target"),
        }
    }

    Ok(pool)
}

/// The built-in greeting words as a target pool
#[must_use]
pub fn greeting_targets() -> Vec<Word> {
    GREETINGS.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Pick a uniformly random target from `pool`
///
/// Returns `None` if `pool` is empty.
pub fn pick_target<R: Rng + ?Sized>(pool: &[Word], rng: &mut R) -> Option<Word> {
    pool.choose(rng).copied()
}
