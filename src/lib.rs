//! Birthday Wordle and Cake Snake
//!
//! Two small game engines from an interactive birthday greeting, plus a
//! terminal front end for each.
//!
//! - [`wordle`]: guess the 5-letter target word in five tries
//! - [`snake`]: steer a growing snake to cakes and stars before the clock runs out
//!
//! Engines are plain state machines. Their timers (snake movement, countdown,
//! star spawns, the delayed puzzle completion) run on a deterministic
//! [`scheduler::Scheduler`], so a whole game can be replayed in tests by
//! advancing virtual time.
//!
//! # Examples
//! ```
//! use party_games::config::SnakeRules;
//! use party_games::snake::{Direction, RunStatus, SnakeSession};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::time::Duration;
//!
//! let mut session = SnakeSession::new(SnakeRules::default(), StdRng::seed_from_u64(1));
//! session.start();
//! session.set_heading(Direction::Up);
//! session.advance(Duration::from_millis(300));
//! assert_eq!(session.game().head().map(|c| (c.x, c.y)), Some((7, 5)));
//! assert_eq!(session.game().status(), RunStatus::Running);
//! ```

pub mod config;
pub mod core;
pub mod plain;
pub mod scheduler;
pub mod snake;
pub mod tui;
pub mod wordle;
pub mod wordlists;
