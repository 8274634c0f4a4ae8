//! Timer-driven wrapper around a puzzle
//!
//! A win is announced to the outside world only after the win animation had
//! time to play, so the completion signal is a delayed scheduler task.

use super::game::{SubmitOutcome, WordleGame};
use crate::config::WordleRules;
use crate::scheduler::Scheduler;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordleTask {
    Complete,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordleEvent {
    /// Fired once, `completion_delay` after a winning guess
    Completed,
}

/// How the player left a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordleExit {
    /// Solved, and the completion delay ran out
    Completed,
    /// Left before completion, or ran out of tries
    Quit,
}

/// A puzzle plus the timers attached to it
#[derive(Debug, Clone)]
pub struct WordleSession {
    game: WordleGame,
    scheduler: Scheduler<WordleTask>,
}

impl WordleSession {
    #[must_use]
    pub fn new(rules: WordleRules) -> Self {
        Self {
            game: WordleGame::new(rules),
            scheduler: Scheduler::new(),
        }
    }

    pub fn append_letter(&mut self, letter: char) -> bool {
        self.game.append_letter(letter)
    }

    pub fn backspace(&mut self) {
        self.game.backspace();
    }

    pub fn dismiss_hint(&mut self) {
        self.game.dismiss_hint();
    }

    /// Submit the input row, arming the completion signal on a win
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        let outcome = self.game.submit_guess();
        if outcome == SubmitOutcome::Won {
            self.scheduler
                .after(self.game.rules().completion_delay, WordleTask::Complete);
        }
        outcome
    }

    /// Let `elapsed` time pass
    pub fn advance(&mut self, elapsed: Duration) -> Vec<WordleEvent> {
        self.scheduler
            .advance(elapsed)
            .into_iter()
            .map(|task| match task {
                WordleTask::Complete => {
                    info!("puzzle completion signalled");
                    WordleEvent::Completed
                }
            })
            .collect()
    }

    /// Throw the puzzle away and start over, cancelling pending signals
    pub fn restart(&mut self) {
        self.scheduler.clear();
        self.game = WordleGame::new(self.game.rules().clone());
    }

    /// Whether a completion signal is still pending
    #[must_use]
    pub fn completion_pending(&self) -> bool {
        !self.scheduler.is_empty()
    }

    #[must_use]
    pub const fn game(&self) -> &WordleGame {
        &self.game
    }
}
