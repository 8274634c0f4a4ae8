//! Line-oriented puzzle front end
//!
//! Reads one guess per line and prints the colored tile row after each
//! submission, for terminals where the full-screen UI is unwanted.

use crate::core::{Feedback, TileState, Word};
use crate::wordle::{SubmitOutcome, WordleEvent, WordleExit, WordleSession};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Render a submitted guess as a row of colored tiles
#[must_use]
pub fn render_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.tiles())
        .map(|(letter, tile)| {
            let cell = format!(" {letter} ");
            match tile {
                TileState::Correct => cell.black().on_green().to_string(),
                TileState::Present => cell.black().on_yellow().to_string(),
                TileState::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Play one puzzle reading guesses from `input` and writing to `out`
///
/// Stops at the end of input or when the puzzle is over. After a win,
/// `wait` is called with the completion delay before the session is
/// advanced past it, so the caller decides how real time passes.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `out`.
pub fn play<I, O, W>(
    session: &mut WordleSession,
    input: I,
    mut out: O,
    mut wait: W,
) -> io::Result<WordleExit>
where
    I: BufRead,
    O: Write,
    W: FnMut(Duration),
{
    writeln!(
        out,
        "{} ({} tries)",
        "Birthday Wordle".bold(),
        session.game().remaining_attempts()
    )?;

    for line in input.lines() {
        let line = line?;
        let Ok(word) = Word::new(line.trim()) else {
            writeln!(out, "{}", "Guesses must be exactly 5 letters".red())?;
            continue;
        };
        for letter in word.text().chars() {
            session.append_letter(letter);
        }
        let outcome = session.submit_guess();
        if outcome == SubmitOutcome::Ignored {
            break;
        }

        let game = session.game();
        if let Some((guess, feedback)) = game.rows().last() {
            writeln!(out, "{}", render_row(&guess, &feedback))?;
        }

        match outcome {
            SubmitOutcome::Won => {
                writeln!(out, "{}", "Correct! You got it!".green().bold())?;
                writeln!(out, "+10 Birthday Luck")?;
                out.flush()?;

                let delay = game.rules().completion_delay;
                wait(delay);
                if session.advance(delay).contains(&WordleEvent::Completed) {
                    return Ok(WordleExit::Completed);
                }
                break;
            }
            SubmitOutcome::Lost => {
                writeln!(out, "Out of tries! The word was {}", game.target())?;
                break;
            }
            SubmitOutcome::Continue | SubmitOutcome::Ignored => {
                if let Some(hint) = game.visible_hint() {
                    writeln!(out, "{} {hint}", "Hint:".magenta())?;
                    session.dismiss_hint();
                }
            }
        }
    }

    Ok(WordleExit::Quit)
}
