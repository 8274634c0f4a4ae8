//! Word-guessing puzzle engine
//!
//! Holds the guess grid and input row of one puzzle. Every action that is
//! not allowed in the current state is ignored rather than reported.

use crate::config::WordleRules;
use crate::core::{Feedback, WORD_LENGTH, Word};
use tracing::{debug, info};

/// Puzzle progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether the puzzle has finished
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Visibility of the one-time hint bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    /// Not yet earned
    Hidden,
    /// Earned and on screen
    Shown,
    /// Closed by the player
    Dismissed,
}

/// Result of pressing enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input incomplete or puzzle already over; nothing changed
    Ignored,
    /// Guess recorded, puzzle continues
    Continue,
    /// Guess matched the target
    Won,
    /// Last attempt used without a match
    Lost,
}

/// One word-guessing puzzle
#[derive(Debug, Clone)]
pub struct WordleGame {
    rules: WordleRules,
    guesses: Vec<Word>,
    input: Vec<u8>,
    status: GameStatus,
    hint: HintState,
}

impl WordleGame {
    /// Start a puzzle with an empty grid
    #[must_use]
    pub fn new(rules: WordleRules) -> Self {
        Self {
            guesses: Vec::new(),
            input: Vec::with_capacity(WORD_LENGTH),
            status: GameStatus::Playing,
            hint: HintState::Hidden,
            rules,
        }
    }

    /// Type one letter into the input row
    ///
    /// Ignored unless the puzzle is in progress, the row has room and
    /// `letter` is an ASCII letter. Returns whether the letter was taken.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.status != GameStatus::Playing
            || self.input.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        // ASCII checked above
        self.input.push(letter.to_ascii_uppercase() as u8);
        true
    }

    /// Erase the last typed letter, if any
    pub fn backspace(&mut self) {
        if self.status == GameStatus::Playing {
            self.input.pop();
        }
    }

    /// Submit the input row as a guess
    ///
    /// # Examples
    /// ```
    /// use party_games::config::WordleRules;
    /// use party_games::wordle::{GameStatus, SubmitOutcome, WordleGame};
    ///
    /// let mut game = WordleGame::new(WordleRules::default());
    /// for letter in "happy".chars() {
    ///     game.append_letter(letter);
    /// }
    /// assert_eq!(game.submit_guess(), SubmitOutcome::Won);
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if self.status != GameStatus::Playing {
            return SubmitOutcome::Ignored;
        }
        let Ok(letters) = <[u8; WORD_LENGTH]>::try_from(self.input.as_slice()) else {
            return SubmitOutcome::Ignored;
        };
        let Ok(guess) = Word::from_letters(letters) else {
            return SubmitOutcome::Ignored;
        };

        self.guesses.push(guess);
        self.input.clear();
        debug!(guess = %guess, attempt = self.guesses.len(), "guess submitted");

        let outcome = if guess == self.rules.target {
            self.status = GameStatus::Won;
            info!(attempts = self.guesses.len(), "puzzle solved");
            SubmitOutcome::Won
        } else if self.guesses.len() >= self.rules.max_attempts {
            self.status = GameStatus::Lost;
            info!(target = %self.rules.target, "puzzle lost");
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Continue
        };

        if self.status == GameStatus::Playing
            && self.hint == HintState::Hidden
            && self.guesses.len() == self.rules.hint_after
        {
            self.hint = HintState::Shown;
        }

        outcome
    }

    /// Close the hint bubble
    pub fn dismiss_hint(&mut self) {
        if self.hint == HintState::Shown {
            self.hint = HintState::Dismissed;
        }
    }

    /// Hint text while it should be on screen
    #[must_use]
    pub fn visible_hint(&self) -> Option<&str> {
        (self.hint == HintState::Shown && self.status == GameStatus::Playing)
            .then_some(self.rules.hint.as_str())
    }

    #[must_use]
    pub const fn hint_state(&self) -> HintState {
        self.hint
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn input(&self) -> &str {
        // only ASCII uppercase letters are ever pushed
        std::str::from_utf8(&self.input).unwrap_or_default()
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Submitted guesses with their tile verdicts
    pub fn rows(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.guesses
            .iter()
            .map(|guess| (*guess, Feedback::calculate(guess, &self.rules.target)))
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.rules.max_attempts.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn target(&self) -> Word {
        self.rules.target
    }

    #[must_use]
    pub const fn rules(&self) -> &WordleRules {
        &self.rules
    }
}
