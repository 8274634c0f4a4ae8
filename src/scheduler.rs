//! Cooperative task scheduler on a virtual clock
//!
//! Games register recurring and one-shot tasks here instead of relying on
//! platform timers. Time only moves when the caller polls, so tick ordering
//! is fully deterministic: tasks fire in due-time order, and tasks due at
//! the same instant fire in the order they were registered.

use std::time::Duration;

#[derive(Debug, Clone)]
struct Entry<T> {
    due: Duration,
    period: Option<Duration>,
    seq: u64,
    task: T,
}

/// Single-threaded scheduler yielding tasks of type `T`
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of registered tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no task is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `task` to fire every `period`, first one period from now
    ///
    /// # Panics
    /// Panics if `period` is zero.
    pub fn every(&mut self, period: Duration, task: T) {
        assert!(!period.is_zero(), "recurring task period must be non-zero");
        self.push(self.now + period, Some(period), task);
    }

    /// Register `task` to fire once, `delay` from now
    pub fn after(&mut self, delay: Duration, task: T) {
        self.push(self.now + delay, None, task);
    }

    /// Cancel every registered task
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Take the next task due at or before `horizon`
    ///
    /// Moves the clock to the task's due time. Recurring tasks are re-armed
    /// one period later and keep their registration rank.
    pub fn poll(&mut self, horizon: Duration) -> Option<T>
    where
        T: Clone,
    {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= horizon)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[index];
        self.now = self.now.max(entry.due);

        if let Some(period) = entry.period {
            entry.due += period;
            Some(entry.task.clone())
        } else {
            Some(self.entries.swap_remove(index).task)
        }
    }

    /// Move the clock forward to `horizon` without firing anything
    pub fn settle(&mut self, horizon: Duration) {
        self.now = self.now.max(horizon);
    }

    /// Fire everything due within `elapsed` from now, in order
    ///
    /// # Examples
    /// ```
    /// use party_games::scheduler::Scheduler;
    /// use std::time::Duration;
    ///
    /// let mut scheduler = Scheduler::new();
    /// scheduler.every(Duration::from_millis(150), "move");
    /// scheduler.every(Duration::from_secs(1), "countdown");
    ///
    /// let fired = scheduler.advance(Duration::from_secs(1));
    /// assert_eq!(fired.iter().filter(|&&t| t == "move").count(), 6);
    /// assert_eq!(fired.last(), Some(&"countdown"));
    /// ```
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T>
    where
        T: Clone,
    {
        let horizon = self.now + elapsed;
        let mut fired = Vec::new();
        while let Some(task) = self.poll(horizon) {
            fired.push(task);
        }
        self.settle(horizon);
        fired
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due,
            period,
            seq,
            task,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn nothing_fires_before_due() {
        let mut scheduler = Scheduler::new();
        scheduler.after(100 * MS, 1);
        assert!(scheduler.advance(99 * MS).is_empty());
        assert_eq!(scheduler.advance(MS), vec![1]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn recurring_task_rearms() {
        let mut scheduler = Scheduler::new();
        scheduler.every(10 * MS, 'a');
        assert_eq!(scheduler.advance(35 * MS), vec!['a', 'a', 'a']);
        assert_eq!(scheduler.now(), 35 * MS);
        assert_eq!(scheduler.advance(5 * MS), vec!['a']);
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn ties_fire_in_registration_order() {
        let mut scheduler = Scheduler::new();
        scheduler.every(10 * MS, "first");
        scheduler.after(10 * MS, "second");
        let fired = scheduler.advance(10 * MS);
        assert_eq!(fired, vec!["first", "second"]);

        let mut scheduler = Scheduler::new();
        scheduler.after(10 * MS, "b");
        scheduler.every(5 * MS, "a");
        assert_eq!(scheduler.advance(10 * MS), vec!["a", "b", "a"]);
    }

    #[test]
    fn poll_moves_clock_to_due_time() {
        let mut scheduler = Scheduler::new();
        scheduler.every(150 * MS, ());
        assert_eq!(scheduler.poll(Duration::from_secs(1)), Some(()));
        assert_eq!(scheduler.now(), 150 * MS);
        scheduler.settle(Duration::from_secs(1));
        assert_eq!(scheduler.now(), Duration::from_secs(1));
    }

    #[test]
    fn tasks_registered_mid_window_use_current_time() {
        let mut scheduler = Scheduler::new();
        scheduler.after(100 * MS, "spawn");
        let horizon = 500 * MS;
        let mut fired = Vec::new();
        while let Some(task) = scheduler.poll(horizon) {
            if task == "spawn" {
                scheduler.after(300 * MS, "expire");
            }
            fired.push(task);
        }
        scheduler.settle(horizon);
        assert_eq!(fired, vec!["spawn", "expire"]);
    }

    #[test]
    fn clear_cancels_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.every(10 * MS, 1);
        scheduler.after(20 * MS, 2);
        scheduler.clear();
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
        assert!(scheduler.is_empty());
    }
}
