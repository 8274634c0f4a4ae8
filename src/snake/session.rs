//! Timer-driven wrapper around a grid-chase game
//!
//! The movement tick, the one-second countdown, the bonus spawner and every
//! bonus expiry are tasks on one scheduler. They run strictly one after the
//! other, and the moment a run ends every remaining task is cancelled, so no
//! stale tick can touch a finished or restarted board.

use super::engine::{BonusId, EndReason, RunStatus, SnakeGame, TargetKind, TickOutcome};
use super::grid::{Cell, Direction};
use crate::config::SnakeRules;
use crate::scheduler::Scheduler;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnakeTask {
    Move,
    Countdown,
    SpawnBonus,
    ExpireBonus(BonusId),
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    Moved,
    Ate { kind: TargetKind, score: u32 },
    Countdown { remaining_secs: u32 },
    BonusSpawned(Cell),
    BonusExpired,
    Ended { reason: EndReason, score: u32 },
}

/// A game plus the timers that drive it
#[derive(Debug)]
pub struct SnakeSession<R> {
    game: SnakeGame,
    scheduler: Scheduler<SnakeTask>,
    rng: R,
}

impl<R: Rng> SnakeSession<R> {
    #[must_use]
    pub fn new(rules: SnakeRules, rng: R) -> Self {
        Self {
            game: SnakeGame::new(rules),
            scheduler: Scheduler::new(),
            rng,
        }
    }

    /// Start (or restart) a run and arm its timers
    ///
    /// # Panics
    /// Panics if the move, countdown or bonus interval of the rules is zero.
    pub fn start(&mut self) -> bool {
        if !self.game.start() {
            return false;
        }
        let rules = self.game.rules();
        let (movement, countdown, spawn) = (
            rules.move_interval,
            rules.countdown_interval,
            rules.bonus_interval,
        );
        self.scheduler.clear();
        self.scheduler.every(movement, SnakeTask::Move);
        self.scheduler.every(countdown, SnakeTask::Countdown);
        self.scheduler.every(spawn, SnakeTask::SpawnBonus);
        true
    }

    /// Back to the ready screen, cancelling every timer
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.game.reset();
    }

    pub fn set_heading(&mut self, direction: Direction) -> bool {
        self.game.set_heading(direction)
    }

    /// Final score when the player chooses to leave an ended run
    #[must_use]
    pub fn exit(&self) -> Option<u32> {
        self.game.finish()
    }

    /// Let `elapsed` time pass, running due tasks in order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SnakeEvent> {
        let horizon = self.scheduler.now() + elapsed;
        let mut events = Vec::new();

        while let Some(task) = self.scheduler.poll(horizon) {
            if let Some(event) = self.run(task) {
                events.push(event);
            }
            if self.game.status() != RunStatus::Running {
                self.scheduler.clear();
                events.push(SnakeEvent::Ended {
                    reason: self.game.end_reason().unwrap_or(EndReason::TimeUp),
                    score: self.game.score(),
                });
                break;
            }
        }

        self.scheduler.settle(horizon);
        events
    }

    fn run(&mut self, task: SnakeTask) -> Option<SnakeEvent> {
        match task {
            SnakeTask::Move => match self.game.tick(&mut self.rng) {
                TickOutcome::Moved => Some(SnakeEvent::Moved),
                TickOutcome::Ate(kind) => Some(SnakeEvent::Ate {
                    kind,
                    score: self.game.score(),
                }),
                TickOutcome::Idle | TickOutcome::Ended(_) => None,
            },
            SnakeTask::Countdown => {
                self.game.timer_tick();
                (self.game.status() == RunStatus::Running).then(|| SnakeEvent::Countdown {
                    remaining_secs: self.game.remaining_secs(),
                })
            }
            SnakeTask::SpawnBonus => {
                let id = self.game.spawn_bonus(&mut self.rng)?;
                let lifetime = self.game.rules().bonus_lifetime;
                self.scheduler.after(lifetime, SnakeTask::ExpireBonus(id));
                self.game.bonus().map(|b| SnakeEvent::BonusSpawned(b.cell))
            }
            SnakeTask::ExpireBonus(id) => self
                .game
                .expire_bonus(id)
                .then_some(SnakeEvent::BonusExpired),
        }
    }

    /// Whether any timer is still armed
    #[must_use]
    pub fn has_pending_tasks(&self) -> bool {
        !self.scheduler.is_empty()
    }

    #[must_use]
    pub const fn game(&self) -> &SnakeGame {
        &self.game
    }
}
