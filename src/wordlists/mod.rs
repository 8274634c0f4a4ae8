//! Word lists for the guessing puzzle
//!
//! Embedded greeting words plus loading of custom word files.

mod embedded;
pub mod loader;

pub use embedded::{GREETINGS, GREETINGS_COUNT};

/// Target word used when no other is requested
pub const DEFAULT_TARGET: &str = "HAPPY";
