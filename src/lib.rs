//! # Study Planner Core
//!
//! The data layer of a small study planner: an insertion-ordered task list
//! with due dates, completion tracking and local JSON persistence.
//!
//! ## Key Features
//!
//! - **Typed Tasks**: subject, description, `NaiveDate` due date, completion
//!   flag and creation timestamp, with a fixed camelCase JSON shape.
//! - **Write-Through Persistence**: every mutation rewrites one local JSON
//!   file atomically; a missing or corrupt file loads as an empty list.
//! - **Derived Display Order**: incomplete tasks first, then ascending due
//!   date, stable across ties. Never persisted.
//! - **Progress Tracking**: completed/total counts and a percentage that is
//!   safe on an empty list.
//! - **Injectable Clock**: id generation and timestamps are deterministic
//!   under test.
//!
//! ## Quick Start
//!
//! ```no_run
//! use study_planner::{Storage, TaskStore};
//!
//! let mut store = TaskStore::open(Storage::new("tasks.json"));
//! let due = "2025-06-01".parse()?;
//! let id = store.add("Biology", "Label the cell diagram", due)?.id;
//! store.toggle_complete(id)?;
//! for task in store.list() {
//!     println!("{} (due {})", task.subject, task.due_date);
//! }
//! println!("{:.0}% done", store.progress().percentage);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The view layer sits on top: it renders [`TaskStore::list`] and
//! [`TaskStore::progress`], gates deletion behind its own confirmation, and
//! reports [`Error`](error::Error) values back to the user. None of that
//! lives here.

pub mod clock;
pub mod db;
pub mod error;
pub mod store;
pub mod task;

pub use clock::{Clock, SystemClock};
pub use db::{parse_due_input, Storage};
pub use error::{Error, Result};
pub use store::{Progress, TaskStore};
pub use task::{format_due, Task};
