//! Grid-chase engine
//!
//! A snake walks the grid one cell per movement tick, grows when it eats a
//! cake or a star, and the run ends on hitting a wall, itself, or the end of
//! the countdown. The engine only changes state when one of its tick methods
//! is called; timing is the caller's business (see `SnakeSession`).

use super::grid::{Cell, Direction, Grid};
use crate::config::{Placement, SnakeRules};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ready,
    Running,
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    HitWall,
    HitSelf,
    TimeUp,
}

/// Which target was eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Cake, worth one point
    Primary,
    /// Star, worth two points
    Bonus,
}

impl TargetKind {
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Primary => 1,
            Self::Bonus => 2,
        }
    }
}

/// Identity of one spawned bonus, used to match its expiry timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BonusId(u64);

/// A star on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus {
    pub id: BonusId,
    pub cell: Cell,
}

/// Result of one movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened
    Idle,
    /// Moved without eating
    Moved,
    /// Moved onto a target and grew by one cell
    Ate(TargetKind),
    /// The move was fatal; the body stayed where it was
    Ended(EndReason),
}

/// State of one grid-chase game
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeGame {
    rules: SnakeRules,
    grid: Grid,
    body: VecDeque<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
    target: Cell,
    bonus: Option<Bonus>,
    score: u32,
    remaining_secs: u32,
    status: RunStatus,
    end_reason: Option<EndReason>,
    next_bonus_id: u64,
}

impl SnakeGame {
    /// Create a game waiting for its first start
    #[must_use]
    pub fn new(rules: SnakeRules) -> Self {
        let mut game = Self {
            grid: Grid::new(rules.grid_size),
            body: VecDeque::new(),
            heading: Direction::Right,
            pending_heading: None,
            target: rules.first_target,
            bonus: None,
            score: 0,
            remaining_secs: rules.duration_secs,
            status: RunStatus::Ready,
            end_reason: None,
            next_bonus_id: 0,
            rules,
        };
        game.restore();
        game
    }

    /// Begin a run from `Ready` or `Ended`, reinitializing every field
    ///
    /// Returns `false` (and changes nothing) while a run is in progress.
    pub fn start(&mut self) -> bool {
        if self.status == RunStatus::Running {
            return false;
        }
        self.restore();
        self.status = RunStatus::Running;
        info!(duration = self.remaining_secs, "snake run started");
        true
    }

    /// Return to the `Ready` screen with a fresh board
    pub fn reset(&mut self) {
        self.restore();
        self.status = RunStatus::Ready;
    }

    fn restore(&mut self) {
        self.body.clear();
        self.body.push_back(self.rules.start);
        self.heading = Direction::Right;
        self.pending_heading = None;
        self.target = self.rules.first_target;
        self.bonus = None;
        self.score = 0;
        self.remaining_secs = self.rules.duration_secs;
        self.end_reason = None;
        self.next_bonus_id = 0;
    }

    /// Queue a heading change for the next movement tick
    ///
    /// Ignored unless running, and ignored if `direction` would reverse the
    /// snake onto itself. Later calls before the tick replace earlier ones.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if self.status != RunStatus::Running || direction.is_opposite(self.heading) {
            return false;
        }
        self.pending_heading = Some(direction);
        true
    }

    /// Advance the snake one cell
    ///
    /// # Examples
    /// ```
    /// use party_games::config::SnakeRules;
    /// use party_games::snake::{Cell, SnakeGame, TargetKind, TickOutcome};
    ///
    /// let rules = SnakeRules { first_target: Cell::new(8, 7), ..SnakeRules::default() };
    /// let mut game = SnakeGame::new(rules);
    /// game.start();
    ///
    /// let outcome = game.tick(&mut rand::rng());
    /// assert_eq!(outcome, TickOutcome::Ate(TargetKind::Primary));
    /// assert_eq!(game.body().len(), 2);
    /// assert_eq!(game.score(), 1);
    /// ```
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.status != RunStatus::Running {
            return TickOutcome::Idle;
        }
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
        let Some(&head) = self.body.front() else {
            return TickOutcome::Idle;
        };
        let next = head.step(self.heading);

        if !self.grid.contains(next) {
            return self.end(EndReason::HitWall);
        }
        if self.body.contains(&next) {
            return self.end(EndReason::HitSelf);
        }

        self.body.push_front(next);

        if next == self.target {
            self.score += TargetKind::Primary.points();
            self.place_target(rng);
            debug!(score = self.score, target = ?self.target, "cake eaten");
            TickOutcome::Ate(TargetKind::Primary)
        } else if self.bonus.is_some_and(|b| b.cell == next) {
            self.score += TargetKind::Bonus.points();
            self.bonus = None;
            debug!(score = self.score, "star eaten");
            TickOutcome::Ate(TargetKind::Bonus)
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    /// Count the clock down by one second
    ///
    /// Returns `Some(EndReason::TimeUp)` when this tick ran the clock out.
    pub fn timer_tick(&mut self) -> Option<EndReason> {
        if self.status != RunStatus::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.end(EndReason::TimeUp);
            return Some(EndReason::TimeUp);
        }
        None
    }

    /// Maybe drop a star on the board
    ///
    /// Succeeds with the configured probability. A new star replaces any
    /// star still on the board. The caller is expected to arm an expiry for
    /// the returned id.
    pub fn spawn_bonus<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<BonusId> {
        if self.status != RunStatus::Running
            || !rng.random_bool(self.rules.bonus_probability.clamp(0.0, 1.0))
        {
            return None;
        }
        let cell = match self.rules.placement {
            Placement::Anywhere => self.grid.random_cell(rng),
            Placement::FreeCell => {
                let mut occupied = self.occupied();
                occupied.insert(self.target);
                self.grid.random_free_cell(&occupied, rng)?
            }
        };
        let id = BonusId(self.next_bonus_id);
        self.next_bonus_id += 1;
        self.bonus = Some(Bonus { id, cell });
        debug!(?cell, "star spawned");
        Some(id)
    }

    /// Remove the star `id` if it is still on the board
    pub fn expire_bonus(&mut self, id: BonusId) -> bool {
        if self.status == RunStatus::Running && self.bonus.is_some_and(|b| b.id == id) {
            self.bonus = None;
            return true;
        }
        false
    }

    /// Leave the finished game, handing back the final score
    ///
    /// Returns `None` unless the run has ended.
    #[must_use]
    pub fn finish(&self) -> Option<u32> {
        (self.status == RunStatus::Ended).then_some(self.score)
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.status = RunStatus::Ended;
        self.end_reason = Some(reason);
        info!(?reason, score = self.score, "snake run ended");
        TickOutcome::Ended(reason)
    }

    fn place_target<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cell = match self.rules.placement {
            Placement::Anywhere => Some(self.grid.random_cell(rng)),
            Placement::FreeCell => self.grid.random_free_cell(&self.occupied(), rng),
        };
        // a full board keeps the old cell
        if let Some(cell) = cell {
            self.target = cell;
        }
    }

    fn occupied(&self) -> FxHashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Body cells, head first
    #[must_use]
    pub const fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    /// Heading of the last move (pending changes not included)
    #[must_use]
    pub const fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub const fn target(&self) -> Cell {
        self.target
    }

    #[must_use]
    pub const fn bonus(&self) -> Option<Bonus> {
        self.bonus
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Prize earned so far (score times the per-point prize)
    #[must_use]
    pub const fn prize(&self) -> u32 {
        self.score.saturating_mul(self.rules.prize_per_point)
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    #[must_use]
    pub const fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub const fn rules(&self) -> &SnakeRules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn running(rules: SnakeRules) -> SnakeGame {
        let mut game = SnakeGame::new(rules);
        assert!(game.start());
        game
    }

    #[test]
    fn new_game_is_ready() {
        let game = SnakeGame::new(SnakeRules::default());
        assert_eq!(game.status(), RunStatus::Ready);
        assert_eq!(game.body(), &VecDeque::from([Cell::new(7, 7)]));
        assert_eq!(game.target(), Cell::new(10, 10));
        assert_eq!(game.remaining_secs(), 20);
        assert_eq!(game.bonus(), None);
        assert_eq!(game.finish(), None);
    }

    #[test]
    fn nothing_moves_before_start() {
        let mut game = SnakeGame::new(SnakeRules::default());
        assert_eq!(game.tick(&mut rng()), TickOutcome::Idle);
        assert_eq!(game.timer_tick(), None);
        assert!(!game.set_heading(Direction::Up));
        assert_eq!(game.head(), Some(Cell::new(7, 7)));
    }

    #[test]
    fn eating_cake_grows_and_scores() {
        let rules = SnakeRules {
            first_target: Cell::new(8, 7),
            ..SnakeRules::default()
        };
        let mut game = running(rules);

        assert_eq!(game.tick(&mut rng()), TickOutcome::Ate(TargetKind::Primary));
        assert_eq!(
            game.body(),
            &VecDeque::from([Cell::new(8, 7), Cell::new(7, 7)])
        );
        assert_eq!(game.score(), 1);
        assert_eq!(game.prize(), 10);
        assert_ne!(game.target(), Cell::new(8, 7));
        assert!(!game.body().contains(&game.target()));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut game = running(SnakeRules::default());
        assert_eq!(game.tick(&mut rng()), TickOutcome::Moved);
        assert_eq!(game.body(), &VecDeque::from([Cell::new(8, 7)]));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn wall_ends_run_without_moving() {
        let rules = SnakeRules {
            start: Cell::new(0, 7),
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        let mut rng = rng();

        assert!(game.set_heading(Direction::Down));
        game.tick(&mut rng);
        assert!(game.set_heading(Direction::Left));
        let before = game.body().clone();

        assert_eq!(game.tick(&mut rng), TickOutcome::Ended(EndReason::HitWall));
        assert_eq!(game.status(), RunStatus::Ended);
        assert_eq!(game.end_reason(), Some(EndReason::HitWall));
        assert_eq!(game.body(), &before);
        assert_eq!(game.finish(), Some(0));
    }

    #[test]
    fn self_collision_ends_run() {
        let mut game = running(SnakeRules::default());
        // hook shape: head at (5,5) moving Down into (5,6) which is body
        game.body = VecDeque::from([
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
            Cell::new(4, 6),
        ]);
        game.heading = Direction::Left;
        assert!(game.set_heading(Direction::Down));
        let before = game.body().clone();

        assert_eq!(game.tick(&mut rng()), TickOutcome::Ended(EndReason::HitSelf));
        assert_eq!(game.body(), &before);
    }

    #[test]
    fn reverse_heading_is_rejected() {
        let mut game = running(SnakeRules::default());
        assert!(!game.set_heading(Direction::Left));
        game.tick(&mut rng());
        assert_eq!(game.heading(), Direction::Right);
        assert_eq!(game.head(), Some(Cell::new(8, 7)));
    }

    #[test]
    fn reverse_checked_against_last_move_not_pending() {
        let mut game = running(SnakeRules::default());
        assert!(game.set_heading(Direction::Up));
        // Up then Left before the tick: Left still reverses the actual motion
        assert!(!game.set_heading(Direction::Left));
        game.tick(&mut rng());
        assert_eq!(game.heading(), Direction::Up);
    }

    #[test]
    fn heading_changes_coalesce() {
        let mut game = running(SnakeRules::default());
        assert!(game.set_heading(Direction::Up));
        assert!(game.set_heading(Direction::Down));
        game.tick(&mut rng());
        assert_eq!(game.heading(), Direction::Down);
        assert_eq!(game.head(), Some(Cell::new(7, 8)));
    }

    #[test]
    fn bonus_scores_two() {
        let rules = SnakeRules {
            bonus_probability: 1.0,
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        let mut rng = rng();
        let id = game.spawn_bonus(&mut rng).unwrap();
        let bonus = game.bonus().unwrap();
        assert_eq!(bonus.id, id);
        assert_ne!(bonus.cell, game.target());
        assert!(!game.body().contains(&bonus.cell));

        // put the star right in front of the head
        game.bonus = Some(Bonus {
            id,
            cell: Cell::new(8, 7),
        });
        assert_eq!(game.tick(&mut rng), TickOutcome::Ate(TargetKind::Bonus));
        assert_eq!(game.score(), 2);
        assert_eq!(game.body().len(), 2);
        assert_eq!(game.bonus(), None);
    }

    #[test]
    fn bonus_never_spawns_at_zero_probability() {
        let rules = SnakeRules {
            bonus_probability: 0.0,
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        let mut rng = rng();
        for _ in 0..50 {
            assert_eq!(game.spawn_bonus(&mut rng), None);
        }
    }

    #[test]
    fn stale_expiry_keeps_newer_bonus() {
        let rules = SnakeRules {
            bonus_probability: 1.0,
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        let mut rng = rng();
        let first = game.spawn_bonus(&mut rng).unwrap();
        let second = game.spawn_bonus(&mut rng).unwrap();
        assert_ne!(first, second);

        assert!(!game.expire_bonus(first));
        assert_eq!(game.bonus().map(|b| b.id), Some(second));
        assert!(game.expire_bonus(second));
        assert_eq!(game.bonus(), None);
    }

    #[test]
    fn countdown_ends_run_at_zero() {
        let rules = SnakeRules {
            duration_secs: 3,
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        assert_eq!(game.timer_tick(), None);
        assert_eq!(game.timer_tick(), None);
        assert_eq!(game.remaining_secs(), 1);
        assert_eq!(game.timer_tick(), Some(EndReason::TimeUp));
        assert_eq!(game.remaining_secs(), 0);
        assert_eq!(game.status(), RunStatus::Ended);
        assert_eq!(game.end_reason(), Some(EndReason::TimeUp));
    }

    #[test]
    fn ended_game_is_frozen() {
        let rules = SnakeRules {
            duration_secs: 1,
            bonus_probability: 1.0,
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        let mut rng = rng();
        game.tick(&mut rng);
        game.timer_tick();
        assert_eq!(game.status(), RunStatus::Ended);

        let frozen = game.clone();
        assert_eq!(game.tick(&mut rng), TickOutcome::Idle);
        assert_eq!(game.timer_tick(), None);
        assert_eq!(game.spawn_bonus(&mut rng), None);
        assert!(!game.set_heading(Direction::Up));
        assert_eq!(game, frozen);
    }

    #[test]
    fn length_grows_only_on_eating() {
        let mut rng = StdRng::seed_from_u64(9);
        let headings = [
            Direction::Up,
            Direction::Left,
            Direction::Down,
            Direction::Right,
        ];
        for round in 0..20 {
            let rules = SnakeRules {
                bonus_probability: 1.0,
                ..SnakeRules::default()
            };
            let mut game = running(rules);
            for step in 0..200 {
                if step % 3 == 0 {
                    game.set_heading(headings[rng.random_range(0..headings.len())]);
                }
                if step % 7 == 0 {
                    game.spawn_bonus(&mut rng);
                }
                let before = game.body().len();
                let score_before = game.score();
                let outcome = game.tick(&mut rng);
                let grown = usize::from(matches!(outcome, TickOutcome::Ate(_)));
                assert_eq!(game.body().len(), before + grown, "round {round} step {step}");
                assert!(game.score() >= score_before);
                assert!(game.body().iter().all(|&c| game.grid().contains(c)));
                let unique: FxHashSet<Cell> = game.body().iter().copied().collect();
                assert_eq!(unique.len(), game.body().len());
                if game.status() == RunStatus::Ended {
                    break;
                }
            }
        }
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut game = running(SnakeRules::default());
        game.tick(&mut rng());
        let snapshot = game.clone();
        assert!(!game.start());
        assert_eq!(game, snapshot);
    }

    #[test]
    fn restart_and_reset_are_idempotent() {
        let mut game = running(SnakeRules::default());
        let fresh = game.clone();
        let mut rng = rng();
        for _ in 0..10 {
            game.tick(&mut rng);
        }
        game.timer_tick();

        game.reset();
        let ready = game.clone();
        game.reset();
        assert_eq!(game, ready);
        assert_eq!(game.status(), RunStatus::Ready);

        assert!(game.start());
        assert_eq!(game, fresh);
    }

    #[test]
    fn reset_after_bonus_matches_new_game() {
        let rules = SnakeRules {
            bonus_probability: 1.0,
            ..SnakeRules::default()
        };
        let mut game = running(rules.clone());
        let mut rng = rng();
        assert_eq!(game.spawn_bonus(&mut rng), Some(BonusId(0)));
        game.reset();
        assert_eq!(game, SnakeGame::new(rules.clone()));

        assert!(game.start());
        assert_eq!(game.spawn_bonus(&mut rng), Some(BonusId(0)));
        game.reset();
        assert_eq!(game, SnakeGame::new(rules));
    }

    #[test]
    fn anywhere_placement_stays_in_bounds() {
        let rules = SnakeRules {
            placement: Placement::Anywhere,
            first_target: Cell::new(8, 7),
            ..SnakeRules::default()
        };
        let mut game = running(rules);
        game.tick(&mut rng());
        assert!(game.grid().contains(game.target()));
    }
}
