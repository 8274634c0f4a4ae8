//! Full-screen terminal front end
//!
//! One thread: draw, wait briefly for a key, then feed the measured elapsed
//! time into the game session. All game timing happens in the session.

pub mod keys;
pub mod snake_view;
pub mod wordle_view;

use crate::config::{SnakeRules, WordleRules};
use crate::snake::{RunStatus, SnakeSession};
use crate::wordle::{WordleEvent, WordleExit, WordleSession};
use anyhow::Result;
use crossterm::event::{self, Event};
use keys::{SnakeKey, WordleKey};
use rand::Rng;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// How long to wait for input before redrawing
const FRAME: Duration = Duration::from_millis(16);

/// How the player left the grid-chase game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeExit {
    /// Chose to move on after a run, with its final score
    Finished(u32),
    Quit,
}

/// Run the puzzle until it completes or the player leaves
///
/// # Errors
/// Returns an error if the terminal cannot be drawn to or read from.
pub fn run_wordle(rules: WordleRules) -> Result<WordleExit> {
    let mut terminal = ratatui::init();
    let result = wordle_loop(&mut terminal, WordleSession::new(rules));
    ratatui::restore();
    result
}

/// Run the grid-chase game until the player leaves
///
/// # Errors
/// Returns an error if the terminal cannot be drawn to or read from.
pub fn run_snake<R: Rng>(rules: SnakeRules, rng: R) -> Result<SnakeExit> {
    let mut terminal = ratatui::init();
    let result = snake_loop(&mut terminal, SnakeSession::new(rules, rng));
    ratatui::restore();
    result
}

fn wordle_loop(terminal: &mut DefaultTerminal, mut session: WordleSession) -> Result<WordleExit> {
    let mut last = Instant::now();
    loop {
        terminal.draw(|frame| wordle_view::draw(frame, session.game()))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                match keys::wordle_key(key) {
                    Some(WordleKey::Letter(letter)) => {
                        session.append_letter(letter);
                    }
                    Some(WordleKey::Backspace) => session.backspace(),
                    Some(WordleKey::Submit) => {
                        session.submit_guess();
                    }
                    Some(WordleKey::Escape) if session.game().visible_hint().is_some() => {
                        session.dismiss_hint();
                    }
                    Some(WordleKey::Escape | WordleKey::Quit) => return Ok(WordleExit::Quit),
                    None => {}
                }
            }
        }

        let now = Instant::now();
        if session
            .advance(now - last)
            .contains(&WordleEvent::Completed)
        {
            return Ok(WordleExit::Completed);
        }
        last = now;
    }
}

fn snake_loop<R: Rng>(
    terminal: &mut DefaultTerminal,
    mut session: SnakeSession<R>,
) -> Result<SnakeExit> {
    let mut last = Instant::now();
    loop {
        terminal.draw(|frame| snake_view::draw(frame, session.game()))?;

        if event::poll(FRAME)? {
            if let Event::Key(key) = event::read()? {
                match keys::snake_key(key) {
                    Some(SnakeKey::Turn(direction)) => {
                        session.set_heading(direction);
                    }
                    Some(SnakeKey::Confirm) => match session.game().status() {
                        RunStatus::Ready => {
                            session.start();
                        }
                        RunStatus::Ended => {
                            if let Some(score) = session.exit() {
                                return Ok(SnakeExit::Finished(score));
                            }
                        }
                        RunStatus::Running => {}
                    },
                    Some(SnakeKey::Restart) => {
                        if session.game().status() == RunStatus::Ended {
                            session.start();
                        }
                    }
                    Some(SnakeKey::Quit) => return Ok(SnakeExit::Quit),
                    None => {}
                }
            }
        }

        let now = Instant::now();
        session.advance(now - last);
        last = now;
    }
}
