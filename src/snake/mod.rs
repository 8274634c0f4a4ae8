//! Grid-chase game
//!
//! `SnakeGame` is the state machine, `SnakeSession` runs its three periodic
//! timers (movement, countdown, bonus spawn) on one scheduler.

mod engine;
mod grid;
mod session;

pub use engine::{Bonus, BonusId, EndReason, RunStatus, SnakeGame, TargetKind, TickOutcome};
pub use grid::{Cell, Direction, Grid};
pub use session::{SnakeEvent, SnakeSession};
