//! Word-guessing puzzle
//!
//! `WordleGame` is the pure state machine; `WordleSession` adds the delayed
//! completion signal on top of it.

mod game;
mod session;

pub use game::{GameStatus, HintState, SubmitOutcome, WordleGame};
pub use session::{WordleEvent, WordleExit, WordleSession};
