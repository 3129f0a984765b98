//! One-shot deferred tasks on the session's single logical thread.
//!
//! Nothing here spawns threads or timers. The owner calls
//! [`Scheduler::take_due`] with the current time and runs whatever comes
//! back, which keeps deferred work deterministic under test.

use std::time::{Duration, Instant};

/// Identifies a scheduled task. Handles increase monotonically and are never
/// reused by the scheduler that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Raw sequence number.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

#[derive(Debug)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due: Instant,
    payload: T,
}

/// A queue of one-shot tasks keyed by due time.
///
/// Repeated scheduling of equal payloads is not coalesced; each call yields
/// its own task.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_handle: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_handle: 1,
            tasks: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;

        let due = now.checked_add(delay).unwrap_or(now);
        self.tasks.push(ScheduledTask {
            handle,
            due,
            payload,
        });
        log::debug!("scheduled {handle} in {delay:?}");

        handle
    }

    /// Removes and returns every task due at or before `now`, earliest first.
    /// Tasks due at the same instant come out in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<(TaskHandle, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.due <= now);
        self.tasks = pending;

        due.sort_by_key(|t| (t.due, t.handle));
        due.into_iter().map(|t| (t.handle, t.payload)).collect()
    }

    /// Cancels a pending task. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            log::debug!("cancelled {handle}");
        }
        cancelled
    }

    /// Cancels everything still pending and returns how many tasks that was.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Number of pending tasks whose payload satisfies `predicate`.
    pub fn pending_where(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.tasks.iter().filter(|t| predicate(&t.payload)).count()
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.due).min()
    }
}
