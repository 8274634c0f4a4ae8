//! Game rules
//!
//! Every timing and size constant of both games lives here so the binary can
//! override them from the command line and tests can shrink them.

use crate::core::Word;
use crate::snake::Cell;
use crate::wordlists::DEFAULT_TARGET;
use std::time::Duration;

/// Rules of the word-guessing puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordleRules {
    /// Secret answer
    pub target: Word,

    /// Rows available before the puzzle is lost (default: 5)
    pub max_attempts: usize,

    /// Submitted guesses after which the hint appears (default: 2)
    pub hint_after: usize,

    /// Hint shown to the player
    pub hint: String,

    /// Delay between a winning guess and the completion signal (default: 2s)
    pub completion_delay: Duration,
}

impl WordleRules {
    /// Default rules with a different answer
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }
}

impl Default for WordleRules {
    fn default() -> Self {
        Self {
            target: Word::new(DEFAULT_TARGET).expect("default target is a valid word"),
            max_attempts: 5,
            hint_after: 2,
            hint: "____ Birthday!".to_string(),
            completion_delay: Duration::from_secs(2),
        }
    }
}

/// How a fresh target cell is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Uniform over cells not covered by the snake (or the other target)
    #[default]
    FreeCell,

    /// Uniform over the whole grid; a target may land under the snake
    Anywhere,
}

/// Rules of the grid-chase game
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeRules {
    /// Width and height of the square grid (default: 15)
    pub grid_size: i32,

    /// Cell the snake starts on (default: (7, 7))
    pub start: Cell,

    /// Cell of the first cake (default: (10, 10))
    pub first_target: Cell,

    /// Round length in whole seconds (default: 20)
    pub duration_secs: u32,

    /// Time between movement ticks (default: 150ms)
    pub move_interval: Duration,

    /// Time between countdown ticks (default: 1s)
    pub countdown_interval: Duration,

    /// Time between bonus spawn attempts (default: 5s)
    pub bonus_interval: Duration,

    /// Chance that a spawn attempt places a bonus (default: 0.5)
    pub bonus_probability: f64,

    /// Lifetime of an uneaten bonus (default: 3s)
    pub bonus_lifetime: Duration,

    /// Target placement policy (default: `FreeCell`)
    pub placement: Placement,

    /// Prize shown per point of score (default: 10)
    pub prize_per_point: u32,
}

impl Default for SnakeRules {
    fn default() -> Self {
        Self {
            grid_size: 15,
            start: Cell::new(7, 7),
            first_target: Cell::new(10, 10),
            duration_secs: 20,
            move_interval: Duration::from_millis(150),
            countdown_interval: Duration::from_secs(1),
            bonus_interval: Duration::from_secs(5),
            bonus_probability: 0.5,
            bonus_lifetime: Duration::from_secs(3),
            placement: Placement::FreeCell,
            prize_per_point: 10,
        }
    }
}
