//! Cancellable deferred tasks.
//!
//! The swipe engine never sleeps and never spawns threads. Work that must run
//! "after N milliseconds" is parked here with an explicit deadline and handed
//! back by [`Scheduler::poll`] once the caller's clock has passed it. Whoever
//! owns the scheduler decides what "now" is: the egui frame loop passes
//! `Instant::now()`, tests pass synthetic instants.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TaskId,
    deadline: Instant,
    payload: T,
}

/// Single-threaded queue of deadline-ordered tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<Pending<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(2),
            next_id: 0,
        }
    }

    /// Park `payload` until `now + delay`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let deadline = now + delay;

        // Keep sorted by deadline; ties keep insertion order.
        let at = self.tasks.partition_point(|t| t.deadline <= deadline);
        self.tasks.insert(at, Pending { id, deadline, payload });
        id
    }

    /// Drop a task before it fires. Returns false if it already fired or was
    /// cancelled earlier.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Drop every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }

    /// Remove and return every task whose deadline is `<= now`, earliest first.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let due = self.tasks.partition_point(|t| t.deadline <= now);
        self.tasks.drain(..due).map(|t| t.payload).collect()
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.first().map(|t| t.deadline)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}
