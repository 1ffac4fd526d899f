//! Durable storage and due-date input parsing.
//!
//! This module provides the `Storage` adapter that owns the single JSON slot
//! the task list persists to. Reads are forgiving: a missing or corrupt slot
//! degrades to an empty list rather than failing the caller. Writes replace
//! the whole slot in one go.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::task::Task;

/// Persistence adapter over one JSON file holding the full task collection.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Bind the adapter to its slot. Nothing is read until [`Storage::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    /// Path of the underlying slot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task collection, treating a missing or unparsable slot as
    /// "no prior data". Never fails the caller.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let mut buf = String::new();
        match File::open(&self.path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "unparsable task file, starting fresh");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable task file, starting fresh");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full collection using an atomic write
    /// (temp file + rename). Partial writes are never visible.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(tasks).map_err(std::io::Error::from)?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Parse due date input.
///
/// Accepts `YYYY-MM-DD` plus the shortcuts "today", "tomorrow" and "in Nd",
/// resolved against the supplied `today`. Past dates are allowed; empty or
/// unrecognised input is a validation failure.
pub fn parse_due_input(s: &str, today: NaiveDate) -> Result<NaiveDate> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err(Error::empty("due date"));
    }
    match s.as_str() {
        "today" => return Ok(today),
        "tomorrow" => return offset_days(today, 1),
        _ => {}
    }
    if let Some(nd) = s.strip_prefix("in ").and_then(|r| r.strip_suffix('d')) {
        if let Ok(days) = nd.trim().parse::<i64>() {
            return offset_days(today, days);
        }
    }
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| Error::UnrecognisedDueDate)
}

/// Add a day offset without panicking; absurd offsets fail like any other
/// unacceptable input.
fn offset_days(today: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|d| today.checked_add_signed(d))
        .ok_or(Error::UnrecognisedDueDate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: 1736000000000,
                subject: "History".into(),
                description: "Outline essay".into(),
                due_date: "2025-01-10".parse().unwrap(),
                completed: false,
                created_at: Utc.with_ymd_and_hms(2025, 1, 4, 12, 0, 0).unwrap(),
            },
            Task {
                id: 1736000000001,
                subject: "Physics".into(),
                description: "Problem set 4".into(),
                due_date: "2025-01-05".parse().unwrap(),
                completed: true,
                created_at: Utc.with_ymd_and_hms(2025, 1, 4, 12, 0, 1).unwrap(),
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let storage = Storage::new(&path);
        assert_eq!(storage.path(), path);
        let tasks = sample();
        storage.save(&tasks).unwrap();
        assert_eq!(storage.load(), tasks);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("absent.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Storage::new(path).load().is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_slot() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("tasks.json"));
        storage.save(&sample()).unwrap();
        storage.save(&[]).unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_parse_due_input() {
        let today: NaiveDate = "2025-01-10".parse().unwrap();
        assert_eq!(parse_due_input("2025-02-01", today).unwrap(), "2025-02-01".parse::<NaiveDate>().unwrap());
        assert_eq!(parse_due_input("today", today).unwrap(), today);
        assert_eq!(parse_due_input("tomorrow", today).unwrap(), "2025-01-11".parse::<NaiveDate>().unwrap());
        assert_eq!(parse_due_input("in 3d", today).unwrap(), "2025-01-13".parse::<NaiveDate>().unwrap());
        // Past dates are allowed, only the format is checked.
        assert!(parse_due_input("2020-01-01", today).is_ok());
        assert!(parse_due_input("in -2d", today).is_ok());
        assert!(matches!(parse_due_input("", today), Err(Error::Validation { .. })));
        assert!(matches!(parse_due_input("   ", today), Err(Error::Validation { .. })));
        assert!(matches!(
            parse_due_input("next blursday", today),
            Err(Error::UnrecognisedDueDate)
        ));
    }

    #[test]
    fn test_parse_due_input_rejects_out_of_range_offsets() {
        let today: NaiveDate = "2025-01-10".parse().unwrap();
        // Offsets past the representable date range must fail cleanly, not
        // abort inside the date arithmetic.
        for input in ["in 999999999999999d", "in -999999999999999d", "in 9223372036854775807d"] {
            assert!(matches!(
                parse_due_input(input, today),
                Err(Error::UnrecognisedDueDate)
            ));
        }
    }
}
