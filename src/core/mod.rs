//! Core puzzle types
//!
//! Words and the per-letter verdicts shown on the guess grid.

mod feedback;
mod word;

pub use feedback::{Feedback, TileState, classify_letter};
pub use word::{WORD_LENGTH, Word, WordError};
