//! In-memory task store with write-through persistence.
//!
//! `TaskStore` owns the ordered task collection and is the only writer to its
//! `Storage` slot. Every successful mutation writes the full collection back
//! before returning, so the durable snapshot always matches memory.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::db::Storage;
use crate::error::{Error, Result};
use crate::task::Task;

/// Derived completion statistics for the whole collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Share of completed tasks, 0.0 to 100.0. Zero for an empty collection.
    pub percentage: f64,
}

/// The task collection: insertion-ordered storage, derived display order.
///
/// Loads its slot exactly once at construction; afterwards the store is the
/// single writer. The clock feeds id generation and creation timestamps.
#[derive(Debug)]
pub struct TaskStore<C: Clock = SystemClock> {
    tasks: Vec<Task>,
    storage: Storage,
    clock: C,
}

impl TaskStore<SystemClock> {
    /// Open the store over the given slot, loading any prior data.
    pub fn open(storage: Storage) -> Self {
        TaskStore::with_clock(storage, SystemClock)
    }
}

impl<C: Clock> TaskStore<C> {
    /// Open the store with an explicit clock.
    pub fn with_clock(storage: Storage, clock: C) -> Self {
        let tasks = storage.load();
        TaskStore { tasks, storage, clock }
    }

    /// Add a new task and persist the collection.
    ///
    /// Subject and description are trimmed and must be non-empty; a blank
    /// field fails with [`Error::Validation`] and leaves the collection
    /// untouched. The new task starts incomplete and is appended, so
    /// insertion order is preserved in storage.
    pub fn add(&mut self, subject: &str, description: &str, due_date: NaiveDate) -> Result<&Task> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(Error::empty("subject"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::empty("description"));
        }

        let now = self.clock.now();
        let task = Task {
            id: self.next_id(now),
            subject: subject.to_string(),
            description: description.to_string(),
            due_date,
            completed: false,
            created_at: now,
        };
        self.tasks.push(task);
        self.storage.save(&self.tasks)?;
        Ok(self.tasks.last().unwrap())
    }

    /// Flip the completion flag of the task with the given id and persist.
    ///
    /// Fails with [`Error::NotFound`] for a stale id; the collection is left
    /// unchanged in that case.
    pub fn toggle_complete(&mut self, id: u64) -> Result<&Task> {
        let idx = self.position(id)?;
        self.tasks[idx].completed = !self.tasks[idx].completed;
        self.storage.save(&self.tasks)?;
        Ok(&self.tasks[idx])
    }

    /// Delete the task with the given id and persist.
    ///
    /// Not idempotent: removing an absent id fails with [`Error::NotFound`].
    pub fn remove(&mut self, id: u64) -> Result<()> {
        let idx = self.position(id)?;
        self.tasks.remove(idx);
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    /// Iterate over all tasks in display order: incomplete before completed,
    /// then ascending due date. Ties keep their insertion order (stable
    /// sort). The order is recomputed on every call and never persisted.
    pub fn list(&self) -> impl Iterator<Item = &Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by_key(|t| (t.completed, t.due_date));
        sorted.into_iter()
    }

    /// Completion statistics. Safe on an empty collection.
    pub fn progress(&self) -> Progress {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let percentage = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Progress { completed, total, percentage }
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Generate a fresh id from the clock's millisecond timestamp, bumping
    /// past any id already taken so uniqueness holds even when two tasks are
    /// created within the same clock tick.
    fn next_id(&self, now: chrono::DateTime<chrono::Utc>) -> u64 {
        let mut id = now.timestamp_millis().max(0) as u64;
        while self.tasks.iter().any(|t| t.id == id) {
            id += 1;
        }
        id
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::NotFound { id })
    }
}
