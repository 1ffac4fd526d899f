//! Task data structure and related functionality.
//!
//! This module defines the `Task` struct that represents a single study item,
//! together with the overdue predicate and a due-date display helper.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single study item with a subject, a description, a due date and a
/// completion flag.
///
/// The serialised shape is fixed: camelCase keys, `dueDate` as `YYYY-MM-DD`,
/// `createdAt` as an RFC 3339 timestamp. Unknown or missing fields are
/// rejected at the persistence boundary rather than defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Task {
    pub id: u64,
    pub subject: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Whether this task is overdue relative to the given date.
    ///
    /// True iff the task is incomplete and strictly past its due date.
    /// Date-only comparison; time of day never enters into it.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        !self.completed && self.due_date < reference
    }
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due(due: NaiveDate, today: NaiveDate) -> String {
    let days = (due - today).num_days();
    if days == 0 {
        "today".into()
    } else if days == 1 {
        "tomorrow".into()
    } else if days > 1 {
        format!("in {days}d")
    } else {
        format!("{}d late", -days)
    }
}
