//! Error taxonomy for the planner core.
//!
//! Validation and stale-id failures are recoverable by the caller; storage
//! write failures carry the underlying I/O error. Storage *read* failures are
//! never surfaced here — `Storage::load` absorbs them and degrades to an
//! empty list.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a planner operation can report to its caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A required text field was empty (after trimming) at creation time.
    #[error("{field} must not be empty")]
    Validation {
        /// Name of the offending field ("subject", "description", "due date").
        field: &'static str,
    },

    /// Due date input that is neither a calendar date nor a known shortcut,
    /// or lands outside the representable date range.
    #[error("unrecognised due date: use YYYY-MM-DD, \"today\", \"tomorrow\" or \"in Nd\"")]
    UnrecognisedDueDate,

    /// No task with the given id exists in the collection.
    #[error("task {id} not found")]
    NotFound { id: u64 },

    /// Writing the durable slot failed. The in-memory collection is intact.
    #[error("failed to save tasks: {0}")]
    Persistence(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn empty(field: &'static str) -> Self {
        Error::Validation { field }
    }
}
