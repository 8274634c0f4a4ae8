//! Tile classification for submitted guesses
//!
//! Each letter of a guess is judged on its own against the target word.
//! Repeated letters are not counted down: a letter that occurs anywhere in
//! the target is `Present` at every mismatched position it appears in.

use super::word::{WORD_LENGTH, Word};

/// Verdict for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Letter matches the target at this position
    Correct,
    /// Letter occurs somewhere else in the target
    Present,
    /// Letter does not occur in the target
    Absent,
}

impl TileState {
    /// Single-character marker used by plain-text output
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '.',
        }
    }
}

/// Classify the letter of `guess` at `index` against `target`
///
/// # Panics
/// Panics if `index >= 5`
///
/// # Examples
/// ```
/// use party_games::core::{Word, TileState, classify_letter};
///
/// let target = Word::new("HAPPY").unwrap();
/// let guess = Word::new("PAPAS").unwrap();
/// assert_eq!(classify_letter(&guess, &target, 0), TileState::Present);
/// assert_eq!(classify_letter(&guess, &target, 1), TileState::Correct);
/// assert_eq!(classify_letter(&guess, &target, 4), TileState::Absent);
/// ```
#[must_use]
pub fn classify_letter(guess: &Word, target: &Word, index: usize) -> TileState {
    let letter = guess.char_at(index);
    if letter == target.char_at(index) {
        TileState::Correct
    } else if target.has_letter(letter) {
        TileState::Present
    } else {
        TileState::Absent
    }
}

/// Classification of a whole guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    tiles: [TileState; WORD_LENGTH],
}

impl Feedback {
    /// Classify every position of `guess` against `target`
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let tiles = std::array::from_fn(|i| classify_letter(guess, target, i));
        Self { tiles }
    }

    /// Per-position verdicts
    #[must_use]
    pub const fn tiles(&self) -> &[TileState; WORD_LENGTH] {
        &self.tiles
    }

    /// Checks if all positions are correct (word guessed)
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.tiles.iter().all(|&t| t == TileState::Correct)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in self.tiles {
            write!(f, "{}", tile.symbol())?;
        }
        Ok(())
    }
}
